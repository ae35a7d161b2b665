//! Core auction types: recipient addresses and phase results.
//!
//! Reward amounts are raw token units ([`Amount`]); fractions are
//! [`UFraction`] fixed point.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::ADDRESS_LEN;
use crate::error::ParseError;
use crate::fixed::UFraction;

/// A reserve or reward amount in the smallest token unit.
pub type Amount = u128;

/// A 20-byte recipient address.
///
/// [`Address::ZERO`] is the "no recipient" sentinel: a phase completed by
/// nobody payable. Displayed and serialized as `0x`-prefixed lowercase hex.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
    bincode::Encode, bincode::Decode,
)]
pub struct Address(pub [u8; ADDRESS_LEN]);

impl Address {
    /// The sentinel address (20 zero bytes).
    pub const ZERO: Self = Self([0u8; ADDRESS_LEN]);

    pub fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Check if this is the sentinel address.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LEN]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes =
            hex::decode(digits).map_err(|e| ParseError::InvalidAddress(format!("{s}: {e}")))?;
        let bytes: [u8; ADDRESS_LEN] = bytes.try_into().map_err(|v: Vec<u8>| {
            ParseError::InvalidAddress(format!(
                "{s}: expected {ADDRESS_LEN} bytes, got {}",
                v.len()
            ))
        })?;
        Ok(Self(bytes))
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Outcome of one completed auction phase.
///
/// Created once when the phase completes, consumed once by reward
/// distribution. `reward_fraction` is the share of the reserve *remaining at
/// this phase's turn*, not of the original reserve.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq,
    bincode::Encode, bincode::Decode,
)]
pub struct AuctionResult {
    /// Who completed the phase. [`Address::ZERO`] means nobody is paid.
    pub recipient: Address,
    /// Share of the remaining reserve owed to `recipient`.
    pub reward_fraction: UFraction,
}

impl AuctionResult {
    pub fn new(recipient: Address, reward_fraction: UFraction) -> Self {
        Self {
            recipient,
            reward_fraction,
        }
    }

    /// A result with the sentinel recipient.
    pub fn unclaimed(reward_fraction: UFraction) -> Self {
        Self::new(Address::ZERO, reward_fraction)
    }

    /// Whether this phase has a payable completer.
    pub fn has_recipient(&self) -> bool {
        !self.recipient.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(seed: u8) -> Address {
        Address([seed; ADDRESS_LEN])
    }

    #[test]
    fn zero_address_is_sentinel() {
        assert!(Address::ZERO.is_zero());
        assert!(Address::default().is_zero());
        assert!(!addr(1).is_zero());
    }

    #[test]
    fn address_display_is_prefixed_hex() {
        let a = addr(0xAB);
        assert_eq!(a.to_string(), format!("0x{}", "ab".repeat(ADDRESS_LEN)));
    }

    #[test]
    fn address_parse_with_and_without_prefix() {
        let a = addr(0x11);
        let hex_digits = "11".repeat(ADDRESS_LEN);
        assert_eq!(format!("0x{hex_digits}").parse::<Address>().unwrap(), a);
        assert_eq!(hex_digits.parse::<Address>().unwrap(), a);
    }

    #[test]
    fn address_parse_rejects_bad_input() {
        assert!("0x1234".parse::<Address>().is_err());
        assert!("zz".repeat(ADDRESS_LEN).parse::<Address>().is_err());
        assert!("".parse::<Address>().is_err());
    }

    #[test]
    fn auction_result_recipient_flag() {
        let half: UFraction = "0.5".parse().unwrap();
        assert!(AuctionResult::new(addr(7), half).has_recipient());
        assert!(!AuctionResult::unclaimed(half).has_recipient());
    }

    #[test]
    fn auction_result_json_shape() {
        let result = AuctionResult::new(addr(0x01), "0.25".parse().unwrap());
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["recipient"], format!("0x{}", "01".repeat(ADDRESS_LEN)));
        assert_eq!(json["reward_fraction"], "0.25");
    }

    #[test]
    fn auction_result_bincode_round_trip() {
        let result = AuctionResult::new(addr(0x42), UFraction::ONE);
        let config = bincode::config::standard();
        let bytes = bincode::encode_to_vec(result, config).unwrap();
        let (decoded, read): (AuctionResult, usize) =
            bincode::decode_from_slice(&bytes, config).unwrap();
        assert_eq!(read, bytes.len());
        assert_eq!(decoded, result);
    }
}
