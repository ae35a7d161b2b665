//! Sequential reward distribution across completed auction phases.
//!
//! Each phase is paid `floor(remaining * fraction)`, where `remaining` is the
//! reserve left after every earlier phase was paid. The order of `results`
//! is therefore significant: a full fraction at phase `i` leaves nothing for
//! phases after it. The sum of all rewards never exceeds the reserve.

use std::collections::BTreeMap;

use draw_core::error::RewardError;
use draw_core::types::{Address, Amount, AuctionResult};
use tracing::debug;

/// Reward owed for a single phase against `reserve`.
///
/// Returns 0 for the sentinel recipient or an empty reserve. Otherwise
/// `floor(reserve * fraction)`: truncation never overpays, and a full
/// fraction returns exactly `reserve`.
pub fn reward(result: &AuctionResult, reserve: Amount) -> Amount {
    if !result.has_recipient() || reserve == 0 {
        return 0;
    }
    result.reward_fraction.mul_amount(reserve)
}

/// Per-phase rewards for `results` against a shrinking `reserve`, in input order.
pub fn rewards(results: &[AuctionResult], reserve: Amount) -> Result<Vec<Amount>, RewardError> {
    Ok(distribute(results, reserve)?.amounts)
}

/// Outcome of distributing a reserve over an ordered list of phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    /// Reward per phase, parallel to the input results.
    pub amounts: Vec<Amount>,
    /// Reserve left after the last phase.
    pub remaining: Amount,
    recipients: Vec<Address>,
}

impl Distribution {
    /// Sum of all phase rewards.
    pub fn total(&self) -> Amount {
        self.amounts.iter().sum()
    }

    /// Non-zero rewards aggregated per recipient.
    ///
    /// A completer that won several phases receives one combined payout.
    pub fn payouts(&self) -> BTreeMap<Address, Amount> {
        let mut payouts = BTreeMap::new();
        for (recipient, &amount) in self.recipients.iter().zip(&self.amounts) {
            if amount > 0 {
                *payouts.entry(*recipient).or_insert(0) += amount;
            }
        }
        payouts
    }
}

/// Apply [`reward`] to each phase in order, subtracting as it goes.
///
/// Fails with [`RewardError::RewardExceedsReserve`] if a phase would be paid
/// more than what remains. That cannot happen for fractions in `[0, 1]`, so
/// it signals a corrupted fraction upstream.
pub fn distribute(results: &[AuctionResult], reserve: Amount) -> Result<Distribution, RewardError> {
    let mut remaining = reserve;
    let mut amounts = Vec::with_capacity(results.len());

    for (index, result) in results.iter().enumerate() {
        let amount = reward(result, remaining);
        remaining = remaining
            .checked_sub(amount)
            .ok_or(RewardError::RewardExceedsReserve {
                reward: amount,
                reserve: remaining,
            })?;
        debug!(
            index,
            recipient = %result.recipient,
            fraction = %result.reward_fraction,
            amount = %amount,
            remaining = %remaining,
            "distribution: phase paid"
        );
        amounts.push(amount);
    }

    Ok(Distribution {
        amounts,
        remaining,
        recipients: results.iter().map(|r| r.recipient).collect(),
    })
}
