//! Randomness-request auction: the first phase of every draw.
//!
//! Opens at the start of each sequence and stays open for the sequence's
//! `auction_duration`. The first caller to complete it in a sequence is
//! recorded with the curve's reward fraction at that moment; later calls in
//! the same sequence are rejected.

use draw_core::error::AuctionError;
use draw_core::fixed::UFraction;
use draw_core::traits::{AuctionTracker, RewardCurve};
use draw_core::types::{Address, AuctionResult};
use tracing::{debug, info};

use crate::config::AuctionConfig;
use crate::curve::ParabolicCurve;
use crate::sequence::AuctionSequence;

/// A completed randomness request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RngCompletion {
    pub sequence_id: u64,
    /// Unix time the request was made; the relay auction clock starts here.
    pub completed_at: u64,
    pub result: AuctionResult,
}

#[derive(Debug, Clone)]
pub struct RngAuction {
    sequence: AuctionSequence,
    target_time_fraction: UFraction,
    target_reward_fraction: UFraction,
    curve: ParabolicCurve,
    last: Option<RngCompletion>,
}

impl RngAuction {
    /// Fails if `target_time_fraction` is zero.
    pub fn new(
        sequence: AuctionSequence,
        target_time_fraction: UFraction,
        target_reward_fraction: UFraction,
    ) -> Result<Self, AuctionError> {
        if target_time_fraction.is_zero() {
            return Err(AuctionError::InvalidConfig("target time fraction is zero".into()));
        }
        Ok(Self {
            sequence,
            target_time_fraction,
            target_reward_fraction,
            curve: ParabolicCurve::new(),
            last: None,
        })
    }

    pub fn from_config(config: &AuctionConfig) -> Result<Self, AuctionError> {
        config.validate()?;
        Self::new(
            config.sequence()?,
            config.target_time_fraction,
            config.target_reward_fraction,
        )
    }

    pub fn sequence(&self) -> &AuctionSequence {
        &self.sequence
    }

    /// Most recent completion, if any.
    pub fn last_completion(&self) -> Option<&RngCompletion> {
        self.last.as_ref()
    }

    pub fn is_sequence_completed(&self, sequence_id: u64) -> bool {
        self.last
            .is_some_and(|last| last.sequence_id == sequence_id)
    }

    /// Reward fraction for completing the current sequence's auction at `now`.
    pub fn current_fractional_reward(&self, now: u64) -> Result<UFraction, AuctionError> {
        self.current_reward_portion(now)
    }

    /// Record `recipient` as the completer of the current sequence.
    pub fn complete(
        &mut self,
        now: u64,
        recipient: Address,
    ) -> Result<RngCompletion, AuctionError> {
        let sequence_id = self.sequence.sequence_id(now)?;
        if self.is_sequence_completed(sequence_id) {
            return Err(AuctionError::AlreadyCompleted(sequence_id));
        }
        if !self.sequence.is_auction_open(now)? {
            debug!(sequence_id, now, "rng_auction: completion after close");
            return Err(AuctionError::AuctionClosed(sequence_id));
        }

        let fraction = self.current_fractional_reward(now)?;
        let completion = RngCompletion {
            sequence_id,
            completed_at: now,
            result: AuctionResult::new(recipient, fraction),
        };
        self.last = Some(completion);

        info!(
            sequence_id,
            %recipient,
            %fraction,
            elapsed = self.sequence.elapsed_time(now)?,
            "rng_auction: completed"
        );
        Ok(completion)
    }
}

impl AuctionTracker for RngAuction {
    fn auction_duration(&self) -> u64 {
        self.sequence.auction_duration
    }

    fn elapsed_time(&self, now: u64) -> Result<u64, AuctionError> {
        self.sequence.elapsed_time(now)
    }

    fn target_time_fraction(&self) -> UFraction {
        self.target_time_fraction
    }

    fn target_reward_fraction(&self) -> UFraction {
        self.target_reward_fraction
    }

    /// Complete once the window closed or the current sequence was already won.
    fn is_auction_complete(&self, now: u64) -> Result<bool, AuctionError> {
        let sequence_id = self.sequence.sequence_id(now)?;
        Ok(!self.sequence.is_auction_open(now)? || self.is_sequence_completed(sequence_id))
    }

    fn curve(&self) -> &dyn RewardCurve {
        &self.curve
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draw_core::constants::ADDRESS_LEN;

    const START: u64 = 1_700_000_000;

    fn addr(seed: u8) -> Address {
        Address([seed; ADDRESS_LEN])
    }

    fn half() -> UFraction {
        "0.5".parse().unwrap()
    }

    /// Daily sequence starting at `START` with a 100-second auction.
    fn auction() -> RngAuction {
        let sequence = AuctionSequence::new(86_400, START, 100).unwrap();
        RngAuction::new(sequence, half(), half()).unwrap()
    }

    #[test]
    fn zero_target_time_rejected() {
        let sequence = AuctionSequence::new(86_400, START, 100).unwrap();
        assert!(RngAuction::new(sequence, UFraction::ZERO, half()).is_err());
    }

    #[test]
    fn reward_follows_curve_through_window() {
        let a = auction();
        assert_eq!(a.current_fractional_reward(START).unwrap(), UFraction::ZERO);
        assert_eq!(a.current_fractional_reward(START + 50).unwrap(), half());
        assert_eq!(a.current_fractional_reward(START + 100).unwrap(), UFraction::ONE);
    }

    #[test]
    fn reward_refused_after_window() {
        let a = auction();
        assert_eq!(
            a.current_fractional_reward(START + 101),
            Err(AuctionError::AuctionComplete)
        );
    }

    #[test]
    fn complete_records_result() {
        let mut a = auction();
        let c = a.complete(START + 50, addr(1)).unwrap();
        assert_eq!(c.sequence_id, 0);
        assert_eq!(c.completed_at, START + 50);
        assert_eq!(c.result, AuctionResult::new(addr(1), half()));
        assert_eq!(a.last_completion(), Some(&c));
        assert!(a.is_sequence_completed(0));
    }

    #[test]
    fn complete_twice_in_sequence_rejected() {
        let mut a = auction();
        a.complete(START + 10, addr(1)).unwrap();
        assert_eq!(
            a.complete(START + 20, addr(2)),
            Err(AuctionError::AlreadyCompleted(0))
        );
        assert_eq!(
            a.current_fractional_reward(START + 20),
            Err(AuctionError::AuctionComplete)
        );
    }

    #[test]
    fn complete_after_close_rejected() {
        let mut a = auction();
        assert_eq!(
            a.complete(START + 101, addr(1)),
            Err(AuctionError::AuctionClosed(0))
        );
        assert!(a.last_completion().is_none());
    }

    #[test]
    fn next_sequence_reopens() {
        let mut a = auction();
        a.complete(START + 10, addr(1)).unwrap();
        let c = a.complete(START + 86_400 + 10, addr(2)).unwrap();
        assert_eq!(c.sequence_id, 1);
        assert!(!a.is_sequence_completed(0));
        assert!(a.is_sequence_completed(1));
    }

    #[test]
    fn before_first_sequence_fails() {
        let mut a = auction();
        assert!(matches!(
            a.complete(START - 1, addr(1)),
            Err(AuctionError::SequenceNotStarted { .. })
        ));
    }

    #[test]
    fn default_config_completes_mid_auction() {
        let mut a = RngAuction::from_config(&AuctionConfig::default()).unwrap();
        let sequence_start = 20_000 * 86_400;
        let c = a.complete(sequence_start + 10_800, addr(3)).unwrap();
        assert_eq!(c.sequence_id, 20_000);
        assert_eq!(c.result.reward_fraction, half());
    }

    #[test]
    fn from_config_uses_config_timing() {
        let cfg = AuctionConfig {
            sequence_period: 1_000,
            sequence_offset: START,
            rng_auction_duration: 200,
            ..AuctionConfig::default()
        };
        let a = RngAuction::from_config(&cfg).unwrap();
        assert_eq!(a.auction_duration(), 200);
        assert_eq!(a.sequence().period, 1_000);
        assert_eq!(a.current_fractional_reward(START + 100).unwrap(), half());
    }
}
