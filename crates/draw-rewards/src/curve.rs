//! Parabolic fractional Dutch auction curve.
//!
//! The reward fraction is a piecewise parabola pinned at `(t, r)`, where `x`
//! is the elapsed fraction of the auction, `t` the target time fraction and
//! `r` the target reward fraction:
//!
//! - `x <= t`: `r - r * ((t - x) / t)^2`, rising from `(0, 0)` to `(t, r)`
//! - `x > t`: `r + (1 - r) * ((x - t) / (1 - t))^2`, rising from `(t, r)` to `(1, 1)`
//!
//! The curve is flat around `t` and steep at the ends. Every step is wide-tier
//! fixed point with truncating multiply/divide; each truncation moves the
//! squared term down, so the result stays monotonic and never leaves `[0, 1]`
//! for `x <= 1`.

use draw_core::error::RewardError;
use draw_core::fixed::{UDecimal, UFraction};
use draw_core::traits::RewardCurve;

/// The production reward curve.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParabolicCurve;

impl ParabolicCurve {
    pub fn new() -> Self {
        Self
    }
}

impl RewardCurve for ParabolicCurve {
    fn fractional_reward(
        &self,
        elapsed: u64,
        duration: u64,
        target_time_fraction: UFraction,
        target_reward_fraction: UFraction,
    ) -> Result<UFraction, RewardError> {
        fractional_reward(elapsed, duration, target_time_fraction, target_reward_fraction)
    }
}

/// Elapsed fraction `elapsed / duration`, unbounded above 1.
pub fn time_fraction(elapsed: u64, duration: u64) -> Result<UDecimal, RewardError> {
    if duration == 0 {
        return Err(RewardError::ZeroAuctionDuration);
    }
    UDecimal::from_ratio(elapsed, duration)
}

/// Base curve formula at time fraction `x`. Does not clamp.
///
/// For `x > 1` the right branch keeps growing past 1; with `t == 1` any
/// `x > 1` divides by zero. Fails with [`RewardError::ZeroTargetTime`] for
/// `t == 0` regardless of `x`.
pub fn evaluate(x: UDecimal, t: UFraction, r: UFraction) -> Result<UDecimal, RewardError> {
    if t.is_zero() {
        return Err(RewardError::ZeroTargetTime);
    }
    let t = t.widen();
    let r = r.widen();

    if x > t {
        // r + (1 - r) * ((x - t) / (1 - t))^2
        let span = UDecimal::ONE.checked_sub(t)?;
        let progress = x.checked_sub(t)?.checked_div(span)?.squared()?;
        let headroom = UDecimal::ONE.checked_sub(r)?;
        r.checked_add(headroom.checked_mul(progress)?)
    } else {
        // r - r * ((t - x) / t)^2
        let remaining = t.checked_sub(x)?.checked_div(t)?.squared()?;
        r.checked_sub(r.checked_mul(remaining)?)
    }
}

/// Reward fraction at `elapsed` seconds into an auction of `duration` seconds.
///
/// `elapsed` is clamped to `duration` first, so a completion after the
/// deadline earns exactly the fraction at `x = 1` and the result always fits
/// the narrow tier. Use [`evaluate`] with [`time_fraction`] for the unclamped
/// curve.
pub fn fractional_reward(
    elapsed: u64,
    duration: u64,
    target_time_fraction: UFraction,
    target_reward_fraction: UFraction,
) -> Result<UFraction, RewardError> {
    let x = time_fraction(elapsed.min(duration), duration)?;
    evaluate(x, target_time_fraction, target_reward_fraction)?.narrow()
}

/// Portion of the remaining reserve a completer earns at `elapsed` seconds
/// into an auction of `duration` seconds. Entry point for trackers and the
/// draw closer; same value as [`fractional_reward`].
pub fn current_reward_portion(
    elapsed: u64,
    duration: u64,
    target_time_fraction: UFraction,
    target_reward_fraction: UFraction,
) -> Result<UFraction, RewardError> {
    fractional_reward(elapsed, duration, target_time_fraction, target_reward_fraction)
}
