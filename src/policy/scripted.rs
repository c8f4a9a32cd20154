//! The fixed deterministic strategy every seat uses.

use tracing::trace;

use super::{CounterContext, DecisionPolicy, Stance, TurnAction};
use crate::cards::{Card, CardLabel};
use crate::core::{MatchState, Player, PlayerId, Role, RuleError};

/// Scripted policy.
///
/// Scans the hand left to right and plays the first eligible card:
/// - Dodge and Unbreakable are never played proactively
/// - Invasion, Arrows and Crossbow are always played
/// - Peach only when wounded
/// - Killing at the next living seat, if that seat may be provoked
/// - Dueling against [`ScriptedPolicy::select_duel_target`]
///
/// Reactive prompts discard the leftmost matching card whenever allowed.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptedPolicy;

/// Eligibility of a single card.
enum Eligibility {
    Skip,
    Use(Option<PlayerId>),
}

impl ScriptedPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// First living player after `me` to challenge to a duel.
    ///
    /// Thieves go for the Main player first, then anyone impressed as a
    /// Thief. Everyone else takes the first player they may provoke.
    pub fn select_duel_target(&self, me: PlayerId, state: &MatchState) -> Result<Option<PlayerId>, RuleError> {
        let role = state.player(me).role();

        if role == Role::Thief {
            let first_with = |wanted: Role| {
                state
                    .living_from(me, false)
                    .find(|p| p.impression() == wanted)
                    .map(|p| p.id)
            };
            return Ok(first_with(Role::Main).or_else(|| first_with(Role::Thief)));
        }

        for other in state.living_from(me, false) {
            if role.can_provoke(other.impression())? {
                return Ok(Some(other.id));
            }
        }
        Ok(None)
    }

    fn eligibility(&self, player: &Player, card: Card, state: &MatchState) -> Result<Eligibility, RuleError> {
        let eligibility = match card.label() {
            CardLabel::Dodge | CardLabel::Unbreakable => Eligibility::Skip,
            CardLabel::Invasion | CardLabel::Arrows | CardLabel::Crossbow => Eligibility::Use(None),
            CardLabel::Peach => {
                if player.is_wounded() {
                    Eligibility::Use(None)
                } else {
                    Eligibility::Skip
                }
            }
            CardLabel::Killing => match state.living_from(player.id, false).next() {
                Some(next) if player.role().can_provoke(next.impression())? => Eligibility::Use(Some(next.id)),
                _ => Eligibility::Skip,
            },
            CardLabel::Dueling => match self.select_duel_target(player.id, state)? {
                Some(target) => Eligibility::Use(Some(target)),
                None => Eligibility::Skip,
            },
            label @ CardLabel::Test => return Err(RuleError::UnresolvedCard(label)),
        };
        Ok(eligibility)
    }
}

impl DecisionPolicy for ScriptedPolicy {
    fn choose_turn_action(
        &self,
        me: PlayerId,
        state: &MatchState,
        killing_used: bool,
    ) -> Result<TurnAction, RuleError> {
        let player = state.player(me);

        for (position, &card) in player.hand.cards().iter().enumerate() {
            let Eligibility::Use(target) = self.eligibility(player, card, state)? else {
                continue;
            };
            if card.label() == CardLabel::Killing && killing_used && !player.weapon {
                continue;
            }
            trace!(seat = me.0, position, label = ?card.label(), target = ?target.map(|t| t.0), "card eligible");
            return Ok(TurnAction::Use { position, target });
        }

        Ok(TurnAction::Skip)
    }

    fn respond_to_attack(&self, me: PlayerId, state: &MatchState, required: CardLabel) -> Option<usize> {
        state.player(me).hand.find_first(required)
    }

    fn consider_counter(
        &self,
        me: PlayerId,
        state: &MatchState,
        pending: &CounterContext,
    ) -> Result<Option<usize>, RuleError> {
        let role = state.player(me).role();
        let target_impression = state.player(pending.target).impression();

        let wants = match pending.stance {
            Stance::Hostile => role.can_flatter(target_impression)?,
            Stance::Friendly => role.can_provoke(target_impression)?,
        };

        if wants {
            Ok(state.player(me).hand.find_first(CardLabel::Unbreakable))
        } else {
            Ok(None)
        }
    }

    fn respond_to_duel_round(&self, me: PlayerId, state: &MatchState, opponent: PlayerId) -> bool {
        // Ministers never fight back against the Main player.
        !(state.player(me).role() == Role::Minister && state.player(opponent).role() == Role::Main)
    }
}
