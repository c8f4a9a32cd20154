//! Errors and match-halting signals.
//!
//! ## RuleError
//!
//! Configuration or programming defects. These never occur in a correctly
//! set-up match and abort the simulation.
//!
//! ## Halt
//!
//! Internal control signal threaded through the resolution stack. A match
//! ending is not a failure, but it must unwind every nested effect (counter
//! chase, duel, area attack) without running anything else, so it travels
//! alongside defects through `?`.

use thiserror::Error;

use super::player::PlayerId;
use super::role::{Camp, Role};
use crate::cards::CardLabel;

/// A defect in the match configuration or in the rule tables.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    /// A card is in hand but no eligibility rule covers it.
    #[error("cannot resolve card {0:?}")]
    UnresolvedCard(CardLabel),

    /// A policy table was consulted with a non-concrete acting role.
    #[error("invalid acting role {0:?}")]
    UnresolvedRole(Role),

    /// A targeted card reached the executor without a target.
    #[error("card {0:?} requires a target")]
    MissingTarget(CardLabel),

    /// A policy asked to play a hand position that does not exist.
    #[error("seat {seat} has no card at position {position}")]
    InvalidPlay { seat: usize, position: usize },

    /// A seat was configured with a role that is not Main, Minister or Thief.
    #[error("seat {seat} has non-concrete role {role:?}")]
    InvalidRole { seat: usize, role: Role },

    /// The draw queue was empty at setup.
    #[error("draw queue is empty")]
    EmptyDeck,

    /// No seat holds the Main role.
    #[error("no Main player configured")]
    NoLeader,

    /// More than one seat holds the Main role.
    #[error("{0} Main players configured, expected exactly one")]
    MultipleLeaders(usize),

    /// More seats than a `PlayerId` can address.
    #[error("{0} players configured, at most 255 supported")]
    TooManyPlayers(usize),

    /// A player sits at a position other than its id.
    #[error("seat {seat} holds {id}")]
    SeatMismatch { seat: usize, id: PlayerId },

    /// Health cap must leave room to be alive.
    #[error("max health must be positive, got {0}")]
    NonPositiveHealth(i32),
}

/// Why resolution stopped early.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Halt {
    /// The match is over and the given camp won.
    Over(Camp),
    /// A fatal defect.
    Defect(RuleError),
}

impl From<RuleError> for Halt {
    fn from(err: RuleError) -> Self {
        Halt::Defect(err)
    }
}

/// Result of any step that may end the match.
pub type Resolution<T = ()> = Result<T, Halt>;
