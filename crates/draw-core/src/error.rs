//! Error types for draw auctions.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RewardError {
    #[error("zero auction duration")] ZeroAuctionDuration,
    #[error("zero target time fraction")] ZeroTargetTime,
    #[error("arithmetic underflow")] ArithmeticUnderflow,
    #[error("arithmetic overflow")] ArithmeticOverflow,
    #[error("division by zero")] DivisionByZero,
    #[error("fraction out of range: raw {0} exceeds 1.0")] FractionOutOfRange(u128),
    #[error("reward {reward} exceeds remaining reserve {reserve}")]
    RewardExceedsReserve { reward: u128, reserve: u128 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuctionError {
    #[error("auction complete")] AuctionComplete,
    #[error("auction closed for sequence {0}")] AuctionClosed(u64),
    #[error("sequence {0} already completed")] AlreadyCompleted(u64),
    #[error("sequence not started: now {now} < offset {offset}")]
    SequenceNotStarted { now: u64, offset: u64 },
    #[error("randomness completed in the future: {completed_at} > {now}")]
    CompletedInFuture { completed_at: u64, now: u64 },
    #[error("invalid config: {0}")] InvalidConfig(String),
    #[error("reward: {0}")] Reward(#[from] RewardError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid fraction: {0}")] InvalidFraction(String),
    #[error("invalid address: {0}")] InvalidAddress(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("encode: {0}")] Encode(String),
    #[error("decode: {0}")] Decode(String),
    #[error("trailing bytes after payload: {0}")] TrailingBytes(usize),
    #[error("result {index}: {source}")] InvalidResult { index: usize, source: RewardError },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("read {}: {source}", .path.display())]
    Read { path: PathBuf, #[source] source: std::io::Error },
    #[error("parse: {0}")] Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum DrawError {
    #[error(transparent)] Reward(#[from] RewardError),
    #[error(transparent)] Auction(#[from] AuctionError),
    #[error(transparent)] Parse(#[from] ParseError),
    #[error(transparent)] Codec(#[from] CodecError),
    #[error("config: {0}")] Config(#[from] ConfigError),
}
