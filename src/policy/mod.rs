//! Decision policies.
//!
//! A policy answers every question the engine asks a player:
//! - Which card to play this turn, and against whom
//! - Whether to discard the card that answers an incoming attack
//! - Whether to play a counter (Unbreakable) on a pending trick
//! - Whether to keep going in a duel
//!
//! Policies are pure functions of the match state. They never mutate it;
//! they report the hand position of the card they want to give up and the
//! engine removes it. The engine holds one boxed policy per seat, so an
//! alternative strategy is a drop-in substitution.

mod scripted;

pub use scripted::ScriptedPolicy;

use serde::{Deserialize, Serialize};

use crate::cards::CardLabel;
use crate::core::{MatchState, PlayerId, RuleError};

/// What a player does with their next play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAction {
    /// End the turn.
    Skip,
    /// Play the card at `position` in hand.
    Use {
        position: usize,
        target: Option<PlayerId>,
    },
}

/// Disposition of a pending act toward its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stance {
    Hostile,
    Friendly,
}

impl Stance {
    /// A counter to an act has the opposite stance toward the target.
    #[must_use]
    pub const fn flip(self) -> Stance {
        match self {
            Stance::Hostile => Stance::Friendly,
            Stance::Friendly => Stance::Hostile,
        }
    }
}

/// A trick (or counter) waiting to take effect, offered for countering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterContext {
    /// Who played the pending card.
    pub initiator: PlayerId,
    /// Who the pending card acts on.
    pub target: PlayerId,
    /// How the pending card treats the target.
    pub stance: Stance,
}

/// Per-player strategy.
pub trait DecisionPolicy: Send + Sync {
    /// Pick the next card to play.
    ///
    /// `killing_used` is set once a Killing has been played this turn.
    fn choose_turn_action(
        &self,
        me: PlayerId,
        state: &MatchState,
        killing_used: bool,
    ) -> Result<TurnAction, RuleError>;

    /// Hand position of the card to discard against an incoming attack
    /// that requires `required`, or `None` to take the damage.
    fn respond_to_attack(&self, me: PlayerId, state: &MatchState, required: CardLabel) -> Option<usize>;

    /// Hand position of an Unbreakable to play against `pending`, or `None`.
    fn consider_counter(
        &self,
        me: PlayerId,
        state: &MatchState,
        pending: &CounterContext,
    ) -> Result<Option<usize>, RuleError>;

    /// Whether to try discarding a Killing in this duel round.
    fn respond_to_duel_round(&self, me: PlayerId, state: &MatchState, opponent: PlayerId) -> bool;
}
