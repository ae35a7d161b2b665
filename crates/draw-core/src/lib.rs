//! # draw-core
//! Foundation types and traits for draw auctions.
//!
//! All fractional math is 18-decimal unsigned fixed point ([`fixed`]).
//! Reward curves and distribution live in `draw-rewards`.

pub mod constants;
pub mod error;
pub mod fixed;
pub mod traits;
pub mod types;

pub use fixed::{UDecimal, UFraction};
pub use types::{Address, Amount, AuctionResult};
