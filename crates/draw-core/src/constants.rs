//! Protocol constants. All fractions are fixed point with [`SCALE`] = 10^18.
//! All durations are in seconds.

use crate::fixed::UFraction;

/// Number of decimal places carried by every fixed-point value.
pub const FRACTION_DECIMALS: u32 = 18;

/// Fixed-point scale: the raw representation of `1.0`.
pub const SCALE: u64 = 1_000_000_000_000_000_000;

/// [`SCALE`] widened for u128 intermediates.
pub const SCALE_U128: u128 = SCALE as u128;

/// Length in bytes of a recipient address.
pub const ADDRESS_LEN: usize = 20;

/// Default draw period: one draw per day.
pub const DEFAULT_SEQUENCE_PERIOD: u64 = 86_400;

/// Default start of sequence 0 (Unix seconds).
pub const DEFAULT_SEQUENCE_OFFSET: u64 = 0;

/// Default lifetime of the randomness-request auction.
pub const DEFAULT_RNG_AUCTION_DURATION: u64 = 6 * 3_600;

/// Default lifetime of the relay auction, measured from randomness completion.
pub const DEFAULT_RELAY_AUCTION_DURATION: u64 = 6 * 3_600;

/// Default curve inflection time (0.5).
pub const DEFAULT_TARGET_TIME_FRACTION: UFraction = UFraction::new_const(SCALE / 2);

/// Default reward paid at the inflection time (0.5).
pub const DEFAULT_TARGET_REWARD_FRACTION: UFraction = UFraction::new_const(SCALE / 2);
