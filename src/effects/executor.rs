//! Card effect execution.
//!
//! A card is detached from its owner's hand before it executes: the engine
//! turns it into an owned [`PendingPlay`], so no effect ever sees a
//! half-removed hand entry.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::damage::{DamageCause, DamageResolver};
use crate::cards::{Card, CardLabel};
use crate::core::{MatchState, PlayerId, Resolution, RuleError};
use crate::policy::{DecisionPolicy, Stance};
use crate::stack::CounterChase;

/// A card taken out of a hand, waiting to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingPlay {
    pub card: Card,
    pub target: Option<PlayerId>,
}

impl PendingPlay {
    #[must_use]
    pub fn new(card: Card, target: Option<PlayerId>) -> Self {
        Self { card, target }
    }

    fn require_target(&self) -> Result<PlayerId, RuleError> {
        self.target.ok_or(RuleError::MissingTarget(self.card.label()))
    }
}

/// Executes card effects.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve `play` for `user`.
    pub fn execute(
        state: &mut MatchState,
        policies: &[Box<dyn DecisionPolicy>],
        user: PlayerId,
        play: PendingPlay,
    ) -> Resolution {
        let label = play.card.label();
        debug!(seat = user.0, ?label, target = ?play.target.map(|t| t.0), "card played");

        match label {
            CardLabel::Peach => {
                let player = state.player_mut(user);
                player.health = (player.health + 1).min(player.max_health);
            }
            CardLabel::Crossbow => state.player_mut(user).weapon = true,
            CardLabel::Killing => {
                let target = play.require_target()?;
                Self::killing(state, policies, user, target)?;
            }
            CardLabel::Dueling => {
                let target = play.require_target()?;
                Self::duel(state, policies, user, target)?;
            }
            CardLabel::Invasion => Self::area_attack(state, policies, user, CardLabel::Killing)?,
            CardLabel::Arrows => Self::area_attack(state, policies, user, CardLabel::Dodge)?,
            CardLabel::Dodge | CardLabel::Unbreakable | CardLabel::Test => {
                trace!(?label, "card has no effect of its own");
            }
        }

        Ok(())
    }

    fn killing(
        state: &mut MatchState,
        policies: &[Box<dyn DecisionPolicy>],
        user: PlayerId,
        target: PlayerId,
    ) -> Resolution {
        if Self::discard_in_response(state, policies, target, CardLabel::Dodge) {
            debug!(seat = target.0, "killing dodged");
            return Ok(());
        }
        DamageResolver::apply(state, target, 1, DamageCause::Killing, user)
    }

    /// Every other living player either discards `required` or takes a point
    /// of damage, unless the attack on them is countered.
    fn area_attack(
        state: &mut MatchState,
        policies: &[Box<dyn DecisionPolicy>],
        user: PlayerId,
        required: CardLabel,
    ) -> Resolution {
        for seat in state.seat_order(user, false) {
            // Checked here, not up front: earlier victims may have died.
            if !state.player(seat).alive {
                continue;
            }
            if CounterChase::is_blocked(state, policies, user, seat, Stance::Hostile)? {
                debug!(seat = seat.0, "area attack countered");
                continue;
            }
            if Self::discard_in_response(state, policies, seat, required) {
                continue;
            }
            DamageResolver::apply(state, seat, 1, DamageCause::Invading, user)?;
        }
        Ok(())
    }

    fn duel(
        state: &mut MatchState,
        policies: &[Box<dyn DecisionPolicy>],
        user: PlayerId,
        target: PlayerId,
    ) -> Resolution {
        // The challenge itself is hostile even if it gets countered.
        DamageResolver::apply(state, target, 0, DamageCause::Dueling, user)?;

        if CounterChase::is_blocked(state, policies, user, target, Stance::Hostile)? {
            debug!(seat = target.0, "duel countered");
            return Ok(());
        }

        let (mut current, mut opponent) = (target, user);
        loop {
            let answers = policies[current.index()].respond_to_duel_round(current, state, opponent)
                && state.player_mut(current).hand.consume_first(CardLabel::Killing).is_some();
            if !answers {
                return DamageResolver::apply(state, current, 1, DamageCause::DuelingFailed, opponent);
            }
            trace!(seat = current.0, "duel answered");
            std::mem::swap(&mut current, &mut opponent);
        }
    }

    /// Ask `responder` for a `required` card and discard it if offered.
    fn discard_in_response(
        state: &mut MatchState,
        policies: &[Box<dyn DecisionPolicy>],
        responder: PlayerId,
        required: CardLabel,
    ) -> bool {
        let Some(position) = policies[responder.index()].respond_to_attack(responder, state, required) else {
            return false;
        };
        let hand = &mut state.player_mut(responder).hand;
        if hand.get(position).map(Card::label) != Some(required) {
            return false;
        }
        hand.remove_at(position).is_some()
    }
}
