//! Periodic draw sequence timing.
//!
//! Draws repeat every `period` seconds starting at `offset`. Sequence `n`
//! covers `[offset + n * period, offset + (n + 1) * period)`, and its
//! randomness-request auction is open for the first `auction_duration`
//! seconds of that window (inclusive of the last second).

use draw_core::error::AuctionError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionSequence {
    /// Seconds between consecutive draws.
    pub period: u64,
    /// Unix time at which sequence 0 starts.
    pub offset: u64,
    /// Seconds the auction stays open at the start of each sequence.
    pub auction_duration: u64,
}

impl AuctionSequence {
    /// Fails unless `0 < auction_duration <= period`.
    pub fn new(period: u64, offset: u64, auction_duration: u64) -> Result<Self, AuctionError> {
        if period == 0 {
            return Err(AuctionError::InvalidConfig("sequence period is zero".into()));
        }
        if auction_duration == 0 {
            return Err(AuctionError::InvalidConfig("auction duration is zero".into()));
        }
        if auction_duration > period {
            return Err(AuctionError::InvalidConfig(format!(
                "auction duration {auction_duration} exceeds sequence period {period}"
            )));
        }
        Ok(Self {
            period,
            offset,
            auction_duration,
        })
    }

    fn since_offset(&self, now: u64) -> Result<u64, AuctionError> {
        now.checked_sub(self.offset)
            .ok_or(AuctionError::SequenceNotStarted {
                now,
                offset: self.offset,
            })
    }

    /// Index of the sequence containing `now`.
    pub fn sequence_id(&self, now: u64) -> Result<u64, AuctionError> {
        Ok(self.since_offset(now)? / self.period)
    }

    /// Seconds since the current sequence started.
    pub fn elapsed_time(&self, now: u64) -> Result<u64, AuctionError> {
        Ok(self.since_offset(now)? % self.period)
    }

    pub fn is_auction_open(&self, now: u64) -> Result<bool, AuctionError> {
        Ok(self.elapsed_time(now)? <= self.auction_duration)
    }

    /// Unix time at which sequence `id` starts, or `None` on overflow.
    pub fn sequence_start(&self, id: u64) -> Option<u64> {
        id.checked_mul(self.period)?.checked_add(self.offset)
    }

    /// Unix time at which the auction of sequence `id` closes (last open second).
    pub fn auction_close(&self, id: u64) -> Option<u64> {
        self.sequence_start(id)?.checked_add(self.auction_duration)
    }
}
