//! # draw-rewards — Reward curve and distribution engine for draw auctions.
//!
//! All calculations use integer fixed-point arithmetic only for determinism.
//!
//! - **Parabolic curve**: the reward fraction eases from 0 to 1 over an
//!   auction's lifetime, pinned at a configurable `(time, reward)` point.
//! - **Sequential depletion**: each completed phase is paid a fraction of the
//!   reserve left over by the phases before it.
//! - **Trackers**: the randomness-request auction runs once per draw
//!   sequence; the relay auction starts when randomness completes and pays
//!   out every phase of the chain.
//! - **Relay payload**: bincode codec carrying randomness and prior phase
//!   results across a network boundary.

pub mod config;
pub mod curve;
pub mod distribution;
pub mod payload;
pub mod relay;
pub mod rng_auction;
pub mod sequence;

pub use config::AuctionConfig;
pub use curve::{current_reward_portion, fractional_reward, ParabolicCurve};
pub use distribution::{distribute, reward, rewards, Distribution};
pub use payload::RelayPayload;
pub use relay::{RelayAuction, RelayOutcome};
pub use rng_auction::{RngAuction, RngCompletion};
pub use sequence::AuctionSequence;
