//! Counter chase for tricks.
//!
//! When a trick acts between two players, every living player, starting
//! with the one who played it, gets a chance to answer with Unbreakable.
//! A counter is itself an act toward the same target with the opposite
//! stance, so it can be countered in turn. The chase ends when a full pass
//! produces no counter; each Unbreakable spent shrinks a finite hand, so
//! the recursion is bounded.

use tracing::debug;

use crate::cards::{Card, CardLabel};
use crate::core::{MatchState, PlayerId, RuleError};
use crate::policy::{CounterContext, DecisionPolicy, Stance};

/// Resolves counter chases.
pub struct CounterChase;

impl CounterChase {
    /// Whether the act `initiator` → `target` with `stance` gets blocked.
    ///
    /// A target whose impression is below the shown-identity threshold can
    /// never be protected, so no one is consulted.
    pub fn is_blocked(
        state: &mut MatchState,
        policies: &[Box<dyn DecisionPolicy>],
        initiator: PlayerId,
        target: PlayerId,
        stance: Stance,
    ) -> Result<bool, RuleError> {
        Self::chase(state, policies, initiator, target, stance, 0)
    }

    fn chase(
        state: &mut MatchState,
        policies: &[Box<dyn DecisionPolicy>],
        initiator: PlayerId,
        target: PlayerId,
        stance: Stance,
        depth: usize,
    ) -> Result<bool, RuleError> {
        if !state.player(target).impression().is_shown() {
            return Ok(false);
        }

        let pending = CounterContext {
            initiator,
            target,
            stance,
        };

        for seat in state.seat_order(initiator, true) {
            if !state.player(seat).alive {
                continue;
            }
            let Some(position) = policies[seat.index()].consider_counter(seat, state, &pending)? else {
                continue;
            };

            let player = state.player_mut(seat);
            if player.hand.get(position).map(Card::label) != Some(CardLabel::Unbreakable) {
                continue;
            }
            player.hand.remove_at(position);
            let role = player.role();
            player.strengthen_impression(role);

            debug!(
                seat = seat.0,
                initiator = initiator.0,
                target = target.0,
                ?stance,
                depth,
                "unbreakable played"
            );

            // A blocked counter lets the pending act through.
            let countered = Self::chase(state, policies, seat, target, stance.flip(), depth + 1)?;
            return Ok(!countered);
        }

        Ok(false)
    }
}
