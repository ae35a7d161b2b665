//! Relay auction: the last phase, which carries randomness to the draw
//! closer and pays out the whole chain.
//!
//! The relay clock starts when the randomness request completed, not at the
//! sequence start. Relaying appends the relayer's own result to the prior
//! results and distributes the reserve over all of them in phase order.

use draw_core::error::AuctionError;
use draw_core::fixed::UFraction;
use draw_core::traits::{AuctionTracker, RewardCurve};
use draw_core::types::{Address, Amount, AuctionResult};
use tracing::{debug, info, warn};

use crate::config::AuctionConfig;
use crate::curve::ParabolicCurve;
use crate::distribution::{distribute, Distribution};
use crate::payload::RelayPayload;

/// Outcome of a successful relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayOutcome {
    pub sequence_id: u64,
    pub random_number: [u8; 32],
    /// Every phase result, relay last.
    pub results: Vec<AuctionResult>,
    pub distribution: Distribution,
}

#[derive(Debug, Clone)]
pub struct RelayAuction {
    auction_duration: u64,
    target_time_fraction: UFraction,
    target_reward_fraction: UFraction,
    curve: ParabolicCurve,
    last_sequence_id: Option<u64>,
}

/// The relay auction viewed from one randomness completion time.
#[derive(Debug, Clone, Copy)]
pub struct RelayWindow<'a> {
    auction: &'a RelayAuction,
    rng_completed_at: u64,
}

impl RelayAuction {
    /// Fails if `auction_duration` or `target_time_fraction` is zero.
    pub fn new(
        auction_duration: u64,
        target_time_fraction: UFraction,
        target_reward_fraction: UFraction,
    ) -> Result<Self, AuctionError> {
        if auction_duration == 0 {
            return Err(AuctionError::InvalidConfig("relay auction duration is zero".into()));
        }
        if target_time_fraction.is_zero() {
            return Err(AuctionError::InvalidConfig("target time fraction is zero".into()));
        }
        Ok(Self {
            auction_duration,
            target_time_fraction,
            target_reward_fraction,
            curve: ParabolicCurve::new(),
            last_sequence_id: None,
        })
    }

    pub fn from_config(config: &AuctionConfig) -> Result<Self, AuctionError> {
        config.validate()?;
        Self::new(
            config.relay_auction_duration,
            config.target_time_fraction,
            config.target_reward_fraction,
        )
    }

    /// Tracker view for randomness that completed at `rng_completed_at`.
    pub fn window(&self, rng_completed_at: u64) -> RelayWindow<'_> {
        RelayWindow {
            auction: self,
            rng_completed_at,
        }
    }

    pub fn last_sequence_id(&self) -> Option<u64> {
        self.last_sequence_id
    }

    /// Whether `sequence_id` (or a later one) has already been relayed.
    pub fn is_sequence_completed(&self, sequence_id: u64) -> bool {
        self.last_sequence_id.is_some_and(|last| sequence_id <= last)
    }

    /// Relay fraction at `now` for randomness completed at `rng_completed_at`.
    pub fn compute_reward_fraction(
        &self,
        now: u64,
        rng_completed_at: u64,
    ) -> Result<UFraction, AuctionError> {
        self.window(rng_completed_at).current_reward_portion(now)
    }

    /// Relay `payload` at `now` on behalf of `recipient` and split `reserve`
    /// over every phase.
    pub fn relay(
        &mut self,
        now: u64,
        payload: &RelayPayload,
        recipient: Address,
        reserve: Amount,
    ) -> Result<RelayOutcome, AuctionError> {
        let sequence_id = payload.sequence_id;
        if self.is_sequence_completed(sequence_id) {
            warn!(sequence_id, last = ?self.last_sequence_id, "relay: sequence already relayed");
            return Err(AuctionError::AlreadyCompleted(sequence_id));
        }
        let window = self.window(payload.rng_completed_at);
        if window.is_auction_complete(now)? {
            debug!(
                sequence_id,
                now,
                rng_completed_at = payload.rng_completed_at,
                "relay: auction expired"
            );
            return Err(AuctionError::AuctionClosed(sequence_id));
        }

        let fraction = window.current_reward_portion(now)?;
        let mut results = payload.results.clone();
        results.push(AuctionResult::new(recipient, fraction));
        let distribution = distribute(&results, reserve)?;
        self.last_sequence_id = Some(sequence_id);

        info!(
            sequence_id,
            %recipient,
            %fraction,
            phases = results.len(),
            paid = %distribution.total(),
            remaining = %distribution.remaining,
            "relay: draw rewards distributed"
        );
        Ok(RelayOutcome {
            sequence_id,
            random_number: payload.random_number,
            results,
            distribution,
        })
    }
}

impl AuctionTracker for RelayWindow<'_> {
    fn auction_duration(&self) -> u64 {
        self.auction.auction_duration
    }

    fn elapsed_time(&self, now: u64) -> Result<u64, AuctionError> {
        now.checked_sub(self.rng_completed_at)
            .ok_or(AuctionError::CompletedInFuture {
                completed_at: self.rng_completed_at,
                now,
            })
    }

    fn target_time_fraction(&self) -> UFraction {
        self.auction.target_time_fraction
    }

    fn target_reward_fraction(&self) -> UFraction {
        self.auction.target_reward_fraction
    }

    fn is_auction_complete(&self, now: u64) -> Result<bool, AuctionError> {
        Ok(self.elapsed_time(now)? > self.auction.auction_duration)
    }

    fn curve(&self) -> &dyn RewardCurve {
        &self.auction.curve
    }
}
