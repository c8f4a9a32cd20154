//! Core types: roles, players, match state, configuration, errors.
//!
//! Everything the rule engine reads or mutates lives here; the rules
//! themselves live in `policy`, `stack`, `effects` and `rules`.

pub mod config;
pub mod error;
pub mod player;
pub mod role;
pub mod setup;
pub mod state;

pub use config::MatchConfig;
pub use error::{Halt, Resolution, RuleError};
pub use player::{Player, PlayerId};
pub use role::{Camp, Role, LEAST_SHOWN};
pub use setup::{MatchSetup, SeatSetup, SetupError};
pub use state::{MatchState, SeatView, Snapshot, MAX_PLAYERS};
