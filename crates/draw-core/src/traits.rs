//! Trait interfaces for draw auctions.
//!
//! These traits define the contracts between crates:
//! - [`RewardCurve`] — elapsed time to reward fraction (draw-rewards implements)
//! - [`AuctionTracker`] — phase timing and completion (draw-rewards trackers implement)

use crate::error::{AuctionError, RewardError};
use crate::fixed::UFraction;

/// Pure mapping from auction progress to a reward fraction.
///
/// Implementations must be deterministic, monotonically non-decreasing in
/// `elapsed`, and return exactly `target_reward_fraction` when
/// `elapsed / duration == target_time_fraction`.
pub trait RewardCurve: Send + Sync {
    /// Reward fraction for a completer at `elapsed` seconds into an auction
    /// lasting `duration` seconds.
    ///
    /// Fails with [`RewardError::ZeroAuctionDuration`] if `duration == 0` and
    /// [`RewardError::ZeroTargetTime`] if `target_time_fraction` is zero.
    fn fractional_reward(
        &self,
        elapsed: u64,
        duration: u64,
        target_time_fraction: UFraction,
        target_reward_fraction: UFraction,
    ) -> Result<UFraction, RewardError>;
}

/// Timing view of a single auction phase.
///
/// The tracker owns the clock and the completion gate; the curve owns the
/// math. `now` is Unix seconds supplied by the caller.
pub trait AuctionTracker {
    /// Total lifetime of the auction in seconds.
    fn auction_duration(&self) -> u64;

    /// Seconds elapsed in the current auction at `now`.
    fn elapsed_time(&self, now: u64) -> Result<u64, AuctionError>;

    fn target_time_fraction(&self) -> UFraction;

    fn target_reward_fraction(&self) -> UFraction;

    /// Whether the auction can no longer be completed at `now`.
    fn is_auction_complete(&self, now: u64) -> Result<bool, AuctionError>;

    /// The curve this tracker prices completions with.
    fn curve(&self) -> &dyn RewardCurve;

    /// Reward fraction a completer would earn at `now`.
    ///
    /// Default implementation refuses once [`is_auction_complete`](Self::is_auction_complete)
    /// holds, then delegates to [`curve`](Self::curve).
    fn current_reward_portion(&self, now: u64) -> Result<UFraction, AuctionError> {
        if self.is_auction_complete(now)? {
            return Err(AuctionError::AuctionComplete);
        }
        let portion = self.curve().fractional_reward(
            self.elapsed_time(now)?,
            self.auction_duration(),
            self.target_time_fraction(),
            self.target_reward_fraction(),
        )?;
        Ok(portion)
    }
}
