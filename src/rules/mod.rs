//! Match driver.
//!
//! `Match` owns the state and the per-seat policies, advances turns in
//! seat order, and turns the internal match-end signal into a
//! [`RoundOutcome`]. Defects surface as [`crate::core::RuleError`].

pub mod engine;

pub use engine::{Match, RoundOutcome};
