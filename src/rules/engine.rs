//! Match driver.
//!
//! Owns the state and one policy per seat, and runs turns in seat order:
//! - Draw `turn_draw` cards
//! - Ask the policy for a play, detach the card, execute it
//! - Repeat until the policy skips, the player dies, or the match ends

use tracing::{debug, info};

use crate::cards::CardLabel;
use crate::core::{Camp, Halt, MatchState, PlayerId, Resolution, RuleError, Snapshot};
use crate::effects::{EffectResolver, PendingPlay};
use crate::policy::{DecisionPolicy, ScriptedPolicy, TurnAction};

/// Result of advancing the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Nobody has won yet.
    Continue,
    /// The match is over.
    Over(Camp),
}

impl RoundOutcome {
    /// The winning camp, if the match is over.
    #[must_use]
    pub fn winner(self) -> Option<Camp> {
        match self {
            RoundOutcome::Continue => None,
            RoundOutcome::Over(camp) => Some(camp),
        }
    }
}

/// A match in progress.
pub struct Match {
    state: MatchState,
    policies: Vec<Box<dyn DecisionPolicy>>,
    rounds_played: u32,
    winner: Option<Camp>,
}

impl Match {
    /// Create a match where every seat uses [`ScriptedPolicy`].
    #[must_use]
    pub fn new(state: MatchState) -> Self {
        let policies = (0..state.player_count())
            .map(|_| Box::new(ScriptedPolicy::new()) as Box<dyn DecisionPolicy>)
            .collect();
        Self::with_policies(state, policies)
    }

    /// Create a match with one policy per seat, in seat order.
    #[must_use]
    pub fn with_policies(state: MatchState, policies: Vec<Box<dyn DecisionPolicy>>) -> Self {
        assert_eq!(
            policies.len(),
            state.player_count(),
            "Need exactly one policy per seat"
        );
        Self {
            state,
            policies,
            rounds_played: 0,
            winner: None,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Read-only view for presentation.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Completed rounds.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// The winning camp, once decided.
    #[must_use]
    pub fn winner(&self) -> Option<Camp> {
        self.winner
    }

    /// Play one full seat cycle.
    ///
    /// Dead seats are skipped. Once the match is over this does nothing and
    /// keeps reporting the winner.
    pub fn play_round(&mut self) -> Result<RoundOutcome, RuleError> {
        if let Some(camp) = self.winner {
            return Ok(RoundOutcome::Over(camp));
        }

        for seat in PlayerId::all(self.state.player_count()) {
            if !self.state.player(seat).alive {
                continue;
            }
            let outcome = self.play_turn(seat)?;
            if outcome != RoundOutcome::Continue {
                return Ok(outcome);
            }
        }

        self.rounds_played += 1;
        Ok(RoundOutcome::Continue)
    }

    /// Play a single turn for `seat`.
    pub fn play_turn(&mut self, seat: PlayerId) -> Result<RoundOutcome, RuleError> {
        if let Some(camp) = self.winner {
            return Ok(RoundOutcome::Over(camp));
        }

        match self.turn(seat) {
            Ok(()) => Ok(RoundOutcome::Continue),
            Err(Halt::Over(camp)) => {
                info!(winner = %camp, rounds = self.rounds_played, "match over");
                self.winner = Some(camp);
                Ok(RoundOutcome::Over(camp))
            }
            Err(Halt::Defect(err)) => Err(err),
        }
    }

    /// Play rounds until the match ends or `max_rounds` rounds have passed.
    ///
    /// Returns `None` if the limit was reached first.
    pub fn run(&mut self, max_rounds: u32) -> Result<Option<Camp>, RuleError> {
        for _ in 0..max_rounds {
            if let RoundOutcome::Over(camp) = self.play_round()? {
                return Ok(Some(camp));
            }
        }
        Ok(self.winner)
    }

    fn turn(&mut self, seat: PlayerId) -> Resolution {
        let draw = self.state.config().turn_draw;
        self.state.draw_into(seat, draw);
        debug!(seat = seat.0, hand = self.state.player(seat).hand.len(), "turn started");

        let mut killing_used = false;
        loop {
            let action = self.policies[seat.index()].choose_turn_action(seat, &self.state, killing_used)?;
            let TurnAction::Use { position, target } = action else {
                break;
            };

            let card = self
                .state
                .player_mut(seat)
                .hand
                .remove_at(position)
                .ok_or(RuleError::InvalidPlay {
                    seat: seat.index(),
                    position,
                })?;
            if card.label() == CardLabel::Killing {
                killing_used = true;
            }

            EffectResolver::execute(&mut self.state, &self.policies, seat, PendingPlay::new(card, target))?;

            if !self.state.player(seat).alive {
                break;
            }
        }
        Ok(())
    }
}
