//! Shared test helpers for E2E and integration tests.

use draw_core::constants::ADDRESS_LEN;
use draw_core::fixed::UFraction;
use draw_core::types::{Address, Amount, AuctionResult};
use draw_rewards::{AuctionConfig, AuctionSequence, RelayAuction, RngAuction};

/// One whole token at 18 decimals.
pub const ONE_TOKEN: Amount = 1_000_000_000_000_000_000;

/// Start of sequence 0 in every helper config.
pub const GENESIS: u64 = 1_700_000_000;

/// Simple address from a seed byte.
pub fn addr(seed: u8) -> Address {
    Address([seed; ADDRESS_LEN])
}

/// Parse a decimal fraction literal.
pub fn frac(s: &str) -> UFraction {
    s.parse().unwrap()
}

pub fn result(seed: u8, fraction: &str) -> AuctionResult {
    AuctionResult::new(addr(seed), frac(fraction))
}

/// Daily draws from [`GENESIS`], 1-hour rng auction, 1-hour relay auction,
/// curve pinned at `(0.5, 0.5)`.
pub fn test_config() -> AuctionConfig {
    AuctionConfig {
        sequence_period: 86_400,
        sequence_offset: GENESIS,
        rng_auction_duration: 3_600,
        relay_auction_duration: 3_600,
        target_time_fraction: frac("0.5"),
        target_reward_fraction: frac("0.5"),
    }
}

/// Both trackers built from [`test_config`].
pub fn auction_chain() -> (RngAuction, RelayAuction) {
    let cfg = test_config();
    (
        RngAuction::from_config(&cfg).unwrap(),
        RelayAuction::from_config(&cfg).unwrap(),
    )
}

/// Sequence timing matching [`test_config`].
pub fn test_sequence() -> AuctionSequence {
    test_config().sequence().unwrap()
}
