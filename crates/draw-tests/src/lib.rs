//! Adversarial and end-to-end test suite for draw auctions.
//!
//! This crate contains integration tests that drive the reward engine and
//! both auction trackers together, and property tests that try to break the
//! payout invariants under adversarial inputs.

pub mod helpers;
