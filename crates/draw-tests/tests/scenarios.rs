//! Reference scenarios for the reward curve and reserve distribution.

use draw_core::error::RewardError;
use draw_core::fixed::UFraction;
use draw_core::types::AuctionResult;
use draw_rewards::curve::{evaluate, time_fraction};
use draw_rewards::{fractional_reward, reward, rewards};
use draw_tests::helpers::{addr, frac, result, ONE_TOKEN};

// ---------------------------------------------------------------------------
// Curve
// ---------------------------------------------------------------------------

#[test]
fn midpoint_curve_hits_zero_target_and_one() {
    let t = frac("0.5");
    let r = frac("0.5");
    assert_eq!(fractional_reward(0, 1_000, t, r).unwrap(), UFraction::ZERO);
    assert_eq!(fractional_reward(500, 1_000, t, r).unwrap(), frac("0.5"));
    assert_eq!(fractional_reward(1_000, 1_000, t, r).unwrap(), UFraction::ONE);
}

#[test]
fn curve_pinned_for_many_params() {
    for (t, r) in [("0.1", "0.9"), ("0.9", "0.1"), ("0.5", "0"), ("0.25", "1"), ("1", "0.3")] {
        let t = frac(t);
        let r = frac(r);
        assert_eq!(evaluate(t.widen(), t, r).unwrap(), r.widen(), "t={t} r={r}");
    }
}

#[test]
fn zero_duration_and_zero_target_always_fail() {
    assert_eq!(
        fractional_reward(0, 0, frac("0.5"), frac("0.5")),
        Err(RewardError::ZeroAuctionDuration)
    );
    assert_eq!(
        fractional_reward(5, 10, UFraction::ZERO, frac("0.5")),
        Err(RewardError::ZeroTargetTime)
    );
    assert_eq!(
        evaluate(time_fraction(20, 10).unwrap(), UFraction::ZERO, frac("0.5")),
        Err(RewardError::ZeroTargetTime)
    );
}

#[test]
fn curve_is_slow_early_and_steep_late() {
    let t = frac("0.5");
    let r = frac("0.5");
    let early = fractional_reward(100, 1_000, t, r).unwrap();
    let late = fractional_reward(900, 1_000, t, r).unwrap();
    // 0.5 - 0.5 * 0.8^2 = 0.18 and 0.5 + 0.5 * 0.8^2 = 0.82
    assert_eq!(early, frac("0.18"));
    assert_eq!(late, frac("0.82"));
}

#[test]
fn six_hour_auction_quarter_points() {
    let t = frac("0.5");
    let r = frac("0.5");
    assert_eq!(fractional_reward(5_400, 21_600, t, r).unwrap(), frac("0.375"));
    assert_eq!(fractional_reward(10_800, 21_600, t, r).unwrap(), frac("0.5"));
    assert_eq!(fractional_reward(16_200, 21_600, t, r).unwrap(), frac("0.625"));
    assert_eq!(fractional_reward(21_600, 21_600, t, r).unwrap(), UFraction::ONE);
}

// ---------------------------------------------------------------------------
// Distribution
// ---------------------------------------------------------------------------

#[test]
fn three_phase_distribution_exhausts_reserve() {
    let results = [result(0xA, "0"), result(0xA, "0.75"), result(0xA, "1")];
    let amounts = rewards(&results, ONE_TOKEN).unwrap();
    assert_eq!(amounts, vec![0, 750_000_000_000_000_000, 250_000_000_000_000_000]);
    assert_eq!(amounts.iter().sum::<u128>(), ONE_TOKEN);
}

#[test]
fn sentinel_recipient_earns_nothing() {
    let unclaimed = AuctionResult::unclaimed(frac("0.5"));
    assert_eq!(reward(&unclaimed, ONE_TOKEN), 0);
}

#[test]
fn full_fraction_pays_exact_reserve() {
    let full = AuctionResult::new(addr(1), UFraction::ONE);
    assert_eq!(reward(&full, ONE_TOKEN), ONE_TOKEN);
}

#[test]
fn zero_reserve_guard() {
    assert_eq!(reward(&result(1, "1"), 0), 0);
    assert_eq!(rewards(&[result(1, "1"), result(2, "0.5")], 0).unwrap(), vec![0, 0]);
}

#[test]
fn permutation_changes_individual_amounts() {
    let a = result(1, "0.6");
    let b = result(2, "0.3");
    let ab = rewards(&[a, b], 1_000).unwrap();
    let ba = rewards(&[b, a], 1_000).unwrap();
    assert_eq!(ab, vec![600, 120]);
    assert_eq!(ba, vec![300, 420]);
    assert!(ab.iter().sum::<u128>() <= 1_000);
    assert!(ba.iter().sum::<u128>() <= 1_000);
}
