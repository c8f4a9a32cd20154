//! Match state: the seat ring, the draw queue, and read-only snapshots.
//!
//! ## MatchState
//!
//! - Fixed-size, fixed-order ring of players (seat order is turn order)
//! - Draw queue (front = next card)
//! - Count of living Thieves for the loyal win condition
//!
//! ## Snapshot
//!
//! Presentation view for drivers: per seat alive flag, health, impression,
//! and hand contents.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::MatchConfig;
use super::error::RuleError;
use super::player::{Player, PlayerId};
use super::role::Role;
use crate::cards::Card;

/// Most seats a match supports. `PlayerId::all` counts in `u8`.
pub const MAX_PLAYERS: usize = u8::MAX as usize;

/// Complete match state.
///
/// Cloning is cheap for the draw queue thanks to `im::Vector`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    config: MatchConfig,

    players: Vec<Player>,

    /// Draw queue. Never drained below one card.
    deck: Vector<Card>,

    /// Living players whose true role is Thief.
    thief_count: usize,
}

impl MatchState {
    /// Create a match state from validated seats and a draw queue.
    ///
    /// Fails on more than 255 seats, a player whose id is not its seat
    /// index, a non-concrete role, anything but exactly one Main, a
    /// non-positive health cap, or an empty draw queue.
    pub fn new(
        players: Vec<Player>,
        deck: impl IntoIterator<Item = Card>,
        config: MatchConfig,
    ) -> Result<Self, RuleError> {
        if players.len() > MAX_PLAYERS {
            return Err(RuleError::TooManyPlayers(players.len()));
        }
        if config.max_health <= 0 {
            return Err(RuleError::NonPositiveHealth(config.max_health));
        }

        for (seat, player) in players.iter().enumerate() {
            if player.id.index() != seat {
                return Err(RuleError::SeatMismatch { seat, id: player.id });
            }
            if !player.role().is_concrete() {
                return Err(RuleError::InvalidRole {
                    seat,
                    role: player.role(),
                });
            }
        }

        match players.iter().filter(|p| p.role() == Role::Main).count() {
            0 => return Err(RuleError::NoLeader),
            1 => {}
            n => return Err(RuleError::MultipleLeaders(n)),
        }

        let deck: Vector<Card> = deck.into_iter().collect();
        if deck.is_empty() {
            return Err(RuleError::EmptyDeck);
        }

        let thief_count = players
            .iter()
            .filter(|p| p.alive && p.role() == Role::Thief)
            .count();

        Ok(Self {
            config,
            players,
            deck,
            thief_count,
        })
    }

    /// Rule constants for this match.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// All players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Get a player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Get a mutable player.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Living Thieves.
    #[must_use]
    pub fn thief_count(&self) -> usize {
        self.thief_count
    }

    /// Record a Thief death. Returns the remaining count.
    pub(crate) fn thief_died(&mut self) -> usize {
        self.thief_count = self.thief_count.saturating_sub(1);
        self.thief_count
    }

    // === Seat Order ===

    /// Every seat in turn order starting after `from` (or at `from` when
    /// `include_self` is set), wrapping around.
    ///
    /// Liveness is not filtered: callers that mutate state between steps
    /// check `alive` when they reach each seat.
    pub fn seat_order(&self, from: PlayerId, include_self: bool) -> impl Iterator<Item = PlayerId> {
        let count = self.players.len();
        let start = from.index() + usize::from(!include_self);
        let len = count - usize::from(!include_self);
        (0..len).map(move |offset| PlayerId(((start + offset) % count) as u8))
    }

    /// Living seats in turn order starting after (or at) `from`.
    pub fn living_from(
        &self,
        from: PlayerId,
        include_self: bool,
    ) -> impl Iterator<Item = &Player> + '_ {
        self.seat_order(from, include_self)
            .map(move |id| self.player(id))
            .filter(|p| p.alive)
    }

    // === Draw Queue ===

    /// Cards left in the draw queue.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Take the front card. The last card is returned without removal.
    pub fn draw_card(&mut self) -> Card {
        if self.deck.len() > 1 {
            if let Some(card) = self.deck.pop_front() {
                return card;
            }
        }
        // Non-empty by construction.
        self.deck[0]
    }

    /// Draw `count` cards into a player's hand.
    pub fn draw_into(&mut self, id: PlayerId, count: usize) {
        for _ in 0..count {
            let card = self.draw_card();
            self.players[id.index()].hand.push(card);
        }
    }

    // === Views ===

    /// Read-only view for presentation.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            seats: self
                .players
                .iter()
                .map(|p| SeatView {
                    id: p.id,
                    alive: p.alive,
                    health: p.health,
                    impression: p.impression(),
                    hand: p.hand.cards().to_vec(),
                })
                .collect(),
        }
    }
}

/// What a driver may show about one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub id: PlayerId,
    pub alive: bool,
    pub health: i32,
    pub impression: Role,
    pub hand: Vec<Card>,
}

/// Read-only view of all seats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub seats: Vec<SeatView>,
}

impl std::fmt::Display for Snapshot {
    /// One line per seat: card letters, or `DEAD`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for seat in &self.seats {
            if seat.alive {
                let letters: Vec<String> = seat.hand.iter().map(ToString::to_string).collect();
                writeln!(f, "{}", letters.join(" "))?;
            } else {
                writeln!(f, "DEAD")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardLabel, Hand};

    fn seat(id: u8, role: Role) -> Player {
        Player::new(PlayerId::new(id), role, 4, Hand::new())
    }

    fn deck(labels: &[CardLabel]) -> Vec<Card> {
        labels.iter().copied().map(Card::new).collect()
    }

    fn four_seats() -> Vec<Player> {
        vec![
            seat(0, Role::Main),
            seat(1, Role::Thief),
            seat(2, Role::Minister),
            seat(3, Role::Thief),
        ]
    }

    #[test]
    fn test_new_counts_thieves() {
        let state = MatchState::new(four_seats(), deck(&[CardLabel::Killing]), MatchConfig::default()).unwrap();
        assert_eq!(state.player_count(), 4);
        assert_eq!(state.thief_count(), 2);
    }

    #[test]
    fn test_new_rejects_bad_setups() {
        let no_main = vec![seat(0, Role::Thief), seat(1, Role::Minister)];
        assert_eq!(
            MatchState::new(no_main, deck(&[CardLabel::Peach]), MatchConfig::default()).unwrap_err(),
            RuleError::NoLeader
        );

        let two_mains = vec![seat(0, Role::Main), seat(1, Role::Main)];
        assert_eq!(
            MatchState::new(two_mains, deck(&[CardLabel::Peach]), MatchConfig::default()).unwrap_err(),
            RuleError::MultipleLeaders(2)
        );

        let hidden = vec![seat(0, Role::Main), seat(1, Role::Suspected)];
        assert_eq!(
            MatchState::new(hidden, deck(&[CardLabel::Peach]), MatchConfig::default()).unwrap_err(),
            RuleError::InvalidRole { seat: 1, role: Role::Suspected }
        );

        assert_eq!(
            MatchState::new(four_seats(), Vec::new(), MatchConfig::default()).unwrap_err(),
            RuleError::EmptyDeck
        );
    }

    #[test]
    fn test_new_rejects_misplaced_seats() {
        let players = vec![seat(0, Role::Main), seat(7, Role::Thief)];
        assert_eq!(
            MatchState::new(players, deck(&[CardLabel::Peach]), MatchConfig::default()).unwrap_err(),
            RuleError::SeatMismatch { seat: 1, id: PlayerId::new(7) }
        );

        let swapped = vec![seat(1, Role::Thief), seat(0, Role::Main)];
        assert_eq!(
            MatchState::new(swapped, deck(&[CardLabel::Peach]), MatchConfig::default()).unwrap_err(),
            RuleError::SeatMismatch { seat: 0, id: PlayerId::new(1) }
        );
    }

    #[test]
    fn test_new_rejects_too_many_seats() {
        let mut players: Vec<Player> = (0..=254).map(|id| seat(id, Role::Thief)).collect();
        players[0] = seat(0, Role::Main);
        assert!(MatchState::new(players.clone(), deck(&[CardLabel::Peach]), MatchConfig::default()).is_ok());

        players.push(seat(0, Role::Thief));
        assert_eq!(
            MatchState::new(players, deck(&[CardLabel::Peach]), MatchConfig::default()).unwrap_err(),
            RuleError::TooManyPlayers(256)
        );
    }

    #[test]
    fn test_new_rejects_non_positive_health() {
        let config = MatchConfig::default().with_max_health(0);
        assert_eq!(
            MatchState::new(four_seats(), deck(&[CardLabel::Peach]), config).unwrap_err(),
            RuleError::NonPositiveHealth(0)
        );
    }

    #[test]
    fn test_seat_order_wraps() {
        let state = MatchState::new(four_seats(), deck(&[CardLabel::Killing]), MatchConfig::default()).unwrap();

        let after_2: Vec<_> = state.seat_order(PlayerId::new(2), false).collect();
        assert_eq!(after_2, vec![PlayerId::new(3), PlayerId::new(0), PlayerId::new(1)]);

        let from_2: Vec<_> = state.seat_order(PlayerId::new(2), true).collect();
        assert_eq!(
            from_2,
            vec![PlayerId::new(2), PlayerId::new(3), PlayerId::new(0), PlayerId::new(1)]
        );
    }

    #[test]
    fn test_living_from_skips_dead() {
        let mut state = MatchState::new(four_seats(), deck(&[CardLabel::Killing]), MatchConfig::default()).unwrap();
        state.player_mut(PlayerId::new(0)).alive = false;

        let living: Vec<_> = state.living_from(PlayerId::new(2), false).map(|p| p.id).collect();
        assert_eq!(living, vec![PlayerId::new(3), PlayerId::new(1)]);
    }

    #[test]
    fn test_draw_keeps_last_card() {
        let mut state = MatchState::new(
            four_seats(),
            deck(&[CardLabel::Killing, CardLabel::Dodge]),
            MatchConfig::default(),
        )
        .unwrap();

        assert_eq!(state.draw_card().label(), CardLabel::Killing);
        assert_eq!(state.deck_len(), 1);
        assert_eq!(state.draw_card().label(), CardLabel::Dodge);
        assert_eq!(state.draw_card().label(), CardLabel::Dodge);
        assert_eq!(state.deck_len(), 1);
    }

    #[test]
    fn test_draw_into_appends() {
        let mut state = MatchState::new(
            four_seats(),
            deck(&[CardLabel::Peach, CardLabel::Arrows, CardLabel::Test]),
            MatchConfig::default(),
        )
        .unwrap();

        state.draw_into(PlayerId::new(1), 2);
        assert_eq!(state.player(PlayerId::new(1)).hand.letters(), "P W");
        assert_eq!(state.deck_len(), 1);
    }

    #[test]
    fn test_snapshot_display() {
        let mut players = four_seats();
        players[0].hand = [CardLabel::Killing, CardLabel::Dodge].into_iter().collect();
        players[2].alive = false;
        let state = MatchState::new(players, deck(&[CardLabel::Peach]), MatchConfig::default()).unwrap();

        let text = state.snapshot().to_string();
        assert_eq!(text, "K D\n\nDEAD\n\n");
    }

    #[test]
    fn test_snapshot_serialization() {
        let state = MatchState::new(four_seats(), deck(&[CardLabel::Peach]), MatchConfig::default()).unwrap();
        let snapshot = state.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}
