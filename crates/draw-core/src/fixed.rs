//! Unsigned 18-decimal fixed-point arithmetic.
//!
//! Two tiers share the same scale ([`SCALE`] = 10^18):
//! - [`UFraction`]: narrow tier, always in `[0, 1]`. Reward fractions and
//!   anything that crosses a crate or wire boundary use this type.
//! - [`UDecimal`]: wide tier, unbounded above 1. Curve intermediates use
//!   this type and narrow back at the end.
//!
//! Multiplication and division truncate toward zero. Converting between the
//! tiers never touches the raw value; narrowing only checks the bound.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{FRACTION_DECIMALS, SCALE, SCALE_U128};
use crate::error::{ParseError, RewardError};

/// A fixed-point fraction guaranteed to lie in `[0, 1]`.
///
/// Serialized as a decimal string (`"0.75"`) in JSON and as its raw `u64` in
/// bincode. Decoded bincode values must be re-checked with
/// [`UFraction::validate`] since the raw field is not range-checked on decode.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
    bincode::Encode, bincode::Decode,
)]
pub struct UFraction(u64);

impl UFraction {
    /// `0.0`
    pub const ZERO: Self = Self(0);
    /// `1.0`
    pub const ONE: Self = Self(SCALE);

    /// Const constructor for compile-time values. Panics if `raw > SCALE`,
    /// which in a `const` item is a compile error.
    pub const fn new_const(raw: u64) -> Self {
        assert!(raw <= SCALE, "fraction exceeds 1.0");
        Self(raw)
    }

    /// Build from a raw scaled value. Fails if `raw > SCALE`.
    pub fn from_raw(raw: u64) -> Result<Self, RewardError> {
        if raw > SCALE {
            return Err(RewardError::FractionOutOfRange(raw as u128));
        }
        Ok(Self(raw))
    }

    /// `numerator / denominator`, truncated. Fails if the ratio exceeds 1
    /// or the denominator is zero.
    pub fn from_ratio(numerator: u64, denominator: u64) -> Result<Self, RewardError> {
        UDecimal::from_ratio(numerator, denominator)?.narrow()
    }

    /// The raw scaled value.
    pub fn raw(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_one(self) -> bool {
        self.0 == SCALE
    }

    /// Re-check the `[0, 1]` bound. Only needed for values built by a decoder.
    pub fn validate(self) -> Result<Self, RewardError> {
        Self::from_raw(self.0)
    }

    /// Same raw value in the wide tier.
    pub fn widen(self) -> UDecimal {
        UDecimal(self.0 as u128)
    }

    /// `floor(amount * self)`, exact for every `amount`.
    ///
    /// Splits `amount = q * SCALE + m`: `q * raw <= amount` and
    /// `m * raw < SCALE^2`, so no intermediate exceeds u128. The result never
    /// exceeds `amount`, and equals it when `self` is [`UFraction::ONE`].
    pub fn mul_amount(self, amount: u128) -> u128 {
        let raw = self.0 as u128;
        let q = amount / SCALE_U128;
        let m = amount % SCALE_U128;
        q * raw + m * raw / SCALE_U128
    }
}

impl fmt::Display for UFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_decimal(self.0 as u128, f)
    }
}

impl FromStr for UFraction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = parse_decimal(s)?;
        if raw > SCALE_U128 {
            return Err(ParseError::InvalidFraction(format!("{s} exceeds 1")));
        }
        Ok(Self(raw as u64))
    }
}

impl TryFrom<UDecimal> for UFraction {
    type Error = RewardError;

    fn try_from(value: UDecimal) -> Result<Self, Self::Error> {
        value.narrow()
    }
}

impl Serialize for UFraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for UFraction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// A wide fixed-point value, unbounded above 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct UDecimal(u128);

impl UDecimal {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(SCALE_U128);

    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Integer count to fixed point. Cannot overflow: `u64::MAX * 10^18 < u128::MAX`.
    pub fn from_int(n: u64) -> Self {
        Self(n as u128 * SCALE_U128)
    }

    /// `numerator / denominator` at the fixed scale, truncated.
    ///
    /// `numerator * SCALE` is at most `u64::MAX * 10^18`, so this never overflows.
    pub fn from_ratio(numerator: u64, denominator: u64) -> Result<Self, RewardError> {
        if denominator == 0 {
            return Err(RewardError::DivisionByZero);
        }
        Ok(Self(numerator as u128 * SCALE_U128 / denominator as u128))
    }

    pub fn raw(self) -> u128 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self, RewardError> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(RewardError::ArithmeticOverflow)
    }

    /// Fails with [`RewardError::ArithmeticUnderflow`] if `rhs > self`.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, RewardError> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or(RewardError::ArithmeticUnderflow)
    }

    /// `(a * b) / SCALE`, truncating. Fails only if the result exceeds u128.
    pub fn checked_mul(self, rhs: Self) -> Result<Self, RewardError> {
        mul_div_floor(self.0, rhs.0, SCALE_U128)
            .map(Self)
            .ok_or(RewardError::ArithmeticOverflow)
    }

    /// `(a * SCALE) / b`, truncating. Fails only if the result exceeds u128.
    pub fn checked_div(self, rhs: Self) -> Result<Self, RewardError> {
        if rhs.0 == 0 {
            return Err(RewardError::DivisionByZero);
        }
        mul_div_floor(self.0, SCALE_U128, rhs.0)
            .map(Self)
            .ok_or(RewardError::ArithmeticOverflow)
    }

    pub fn squared(self) -> Result<Self, RewardError> {
        self.checked_mul(self)
    }

    /// Drop the fractional part.
    pub fn trunc(self) -> u128 {
        self.0 / SCALE_U128
    }

    /// Reduce to the narrow tier. Fails if the value exceeds 1.
    pub fn narrow(self) -> Result<UFraction, RewardError> {
        if self.0 > SCALE_U128 {
            return Err(RewardError::FractionOutOfRange(self.0));
        }
        Ok(UFraction(self.0 as u64))
    }
}

impl From<UFraction> for UDecimal {
    fn from(value: UFraction) -> Self {
        value.widen()
    }
}

impl fmt::Display for UDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_decimal(self.0, f)
    }
}

impl FromStr for UDecimal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s).map(Self)
    }
}

/// `floor(a * b / d)` with a 256-bit intermediate. `None` if the quotient
/// does not fit u128. `d` must be non-zero.
fn mul_div_floor(a: u128, b: u128, d: u128) -> Option<u128> {
    if let Some(product) = a.checked_mul(b) {
        return Some(product / d);
    }
    let (hi, lo) = widening_mul(a, b);
    if hi >= d {
        return None;
    }
    // Restoring long division of (hi, lo) by d; rem < d throughout.
    let mut rem = hi;
    let mut quot = 0u128;
    for i in (0..128).rev() {
        let carry = rem >> 127;
        rem = (rem << 1) | ((lo >> i) & 1);
        quot <<= 1;
        if carry == 1 || rem >= d {
            rem = rem.wrapping_sub(d);
            quot |= 1;
        }
    }
    Some(quot)
}

/// Full 256-bit product as `(high, low)` halves.
fn widening_mul(a: u128, b: u128) -> (u128, u128) {
    const MASK: u128 = u64::MAX as u128;
    let (a_hi, a_lo) = (a >> 64, a & MASK);
    let (b_hi, b_lo) = (b >> 64, b & MASK);

    let ll = a_lo * b_lo;
    let lh = a_lo * b_hi;
    let hl = a_hi * b_lo;
    let hh = a_hi * b_hi;

    let mid = (ll >> 64) + (lh & MASK) + (hl & MASK);
    let lo = (ll & MASK) | (mid << 64);
    let hi = hh + (lh >> 64) + (hl >> 64) + (mid >> 64);
    (hi, lo)
}

fn fmt_decimal(raw: u128, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let int = raw / SCALE_U128;
    let frac = raw % SCALE_U128;
    if frac == 0 {
        return write!(f, "{int}");
    }
    let digits = format!("{frac:0width$}", width = FRACTION_DECIMALS as usize);
    write!(f, "{int}.{}", digits.trim_end_matches('0'))
}

/// Parse `"<digits>[.<1..=18 digits>]"` into a raw scaled value.
fn parse_decimal(input: &str) -> Result<u128, ParseError> {
    let s = input.trim();
    let invalid = || ParseError::InvalidFraction(input.to_string());

    let (int_part, frac_part) = match s.split_once('.') {
        Some((_, "")) => return Err(invalid()),
        Some((int, frac)) => (int, frac),
        None => (s, ""),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if frac_part.len() > FRACTION_DECIMALS as usize
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let int: u128 = int_part.parse().map_err(|_| invalid())?;
    let frac: u128 = if frac_part.is_empty() {
        0
    } else {
        let digits: u128 = frac_part.parse().map_err(|_| invalid())?;
        digits * 10u128.pow(FRACTION_DECIMALS - frac_part.len() as u32)
    };

    int.checked_mul(SCALE_U128)
        .and_then(|v| v.checked_add(frac))
        .ok_or_else(invalid)
}
