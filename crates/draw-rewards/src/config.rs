//! Auction configuration.
//!
//! Provides [`AuctionConfig`] with defaults for a daily draw and loads
//! overrides from a JSON file. Missing fields fall back to the defaults;
//! every load is validated before use.

use std::path::Path;

use draw_core::constants::{
    DEFAULT_RELAY_AUCTION_DURATION, DEFAULT_RNG_AUCTION_DURATION, DEFAULT_SEQUENCE_OFFSET,
    DEFAULT_SEQUENCE_PERIOD, DEFAULT_TARGET_REWARD_FRACTION, DEFAULT_TARGET_TIME_FRACTION,
};
use draw_core::error::{AuctionError, ConfigError, DrawError};
use draw_core::fixed::UFraction;
use serde::{Deserialize, Serialize};

use crate::sequence::AuctionSequence;

/// Timing and curve parameters shared by the auction chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuctionConfig {
    /// Seconds between draws.
    pub sequence_period: u64,
    /// Unix time at which sequence 0 starts.
    pub sequence_offset: u64,
    /// Lifetime of the randomness-request auction, from sequence start.
    pub rng_auction_duration: u64,
    /// Lifetime of the relay auction, from randomness completion.
    pub relay_auction_duration: u64,
    /// Elapsed fraction at which the curve pays `target_reward_fraction`.
    pub target_time_fraction: UFraction,
    pub target_reward_fraction: UFraction,
}

impl Default for AuctionConfig {
    fn default() -> Self {
        Self {
            sequence_period: DEFAULT_SEQUENCE_PERIOD,
            sequence_offset: DEFAULT_SEQUENCE_OFFSET,
            rng_auction_duration: DEFAULT_RNG_AUCTION_DURATION,
            relay_auction_duration: DEFAULT_RELAY_AUCTION_DURATION,
            target_time_fraction: DEFAULT_TARGET_TIME_FRACTION,
            target_reward_fraction: DEFAULT_TARGET_REWARD_FRACTION,
        }
    }
}

impl AuctionConfig {
    /// Check every field the curve and trackers rely on.
    pub fn validate(&self) -> Result<(), AuctionError> {
        self.sequence()?;
        if self.relay_auction_duration == 0 {
            return Err(AuctionError::InvalidConfig("relay auction duration is zero".into()));
        }
        if self.target_time_fraction.is_zero() {
            return Err(AuctionError::InvalidConfig("target time fraction is zero".into()));
        }
        Ok(())
    }

    /// Sequence timing for the randomness-request auction.
    pub fn sequence(&self) -> Result<AuctionSequence, AuctionError> {
        AuctionSequence::new(
            self.sequence_period,
            self.sequence_offset,
            self.rng_auction_duration,
        )
    }

    /// Parse and validate a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self, DrawError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self, DrawError> {
        let json = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json_str(&json)
    }
}
