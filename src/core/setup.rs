//! Initial match configuration.
//!
//! `MatchSetup` is the validated hand-off from whatever reads the table
//! layout to the engine: seats in order (role and starting hand) plus the
//! draw queue.
//!
//! ## Text format
//!
//! ```text
//! 3 4
//! MP K K D P
//! FP F J N W
//! ZP D D K P
//! K K D J
//! ```
//!
//! The first line holds the player count and deck size. Each seat is a
//! role token (`MP`, `ZP`, `FP`) followed by `hand_size` card letters;
//! the deck follows. Whitespace between letters is optional.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::MatchConfig;
use super::error::RuleError;
use super::player::{Player, PlayerId};
use super::role::Role;
use super::state::{MatchState, MAX_PLAYERS};
use crate::cards::{Card, CardLabel, Hand};

/// Errors reading a text setup.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("unexpected end of input while reading {0}")]
    UnexpectedEnd(&'static str),

    #[error("expected a number, found {0:?}")]
    BadNumber(String),

    #[error("unknown role token {0:?}")]
    UnknownRole(char),

    #[error("unknown card letter {0:?}")]
    UnknownCard(char),

    #[error(transparent)]
    Invalid(#[from] RuleError),
}

/// One seat at setup time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSetup {
    pub role: Role,
    pub hand: Hand,
}

/// Seats in order plus the draw queue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSetup {
    pub seats: Vec<SeatSetup>,
    pub deck: Vec<Card>,
}

impl MatchSetup {
    /// Read the text format. Each seat gets `hand_size` cards.
    pub fn parse(text: &str, hand_size: usize) -> Result<Self, SetupError> {
        let mut scanner = Scanner::new(text);

        let player_count = scanner.number("player count")?;
        let deck_size = scanner.number("deck size")?;

        let mut seats = Vec::with_capacity(player_count);
        for _ in 0..player_count {
            let letter = scanner.char("role")?;
            // Second character of the token ("P") carries no information.
            scanner.char("role")?;
            let role = Role::from_letter(letter).ok_or(SetupError::UnknownRole(letter))?;

            let mut hand = Hand::new();
            for _ in 0..hand_size {
                hand.push(scanner.card()?);
            }
            seats.push(SeatSetup { role, hand });
        }

        let deck = (0..deck_size)
            .map(|_| scanner.card())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { seats, deck })
    }

    /// Validate and build the match state.
    pub fn into_state(self, config: MatchConfig) -> Result<MatchState, RuleError> {
        if self.seats.len() > MAX_PLAYERS {
            return Err(RuleError::TooManyPlayers(self.seats.len()));
        }
        let players = self
            .seats
            .into_iter()
            .zip(0..=u8::MAX)
            .map(|(seat, id)| Player::new(PlayerId::new(id), seat.role, config.max_health, seat.hand))
            .collect();
        MatchState::new(players, self.deck, config)
    }
}

/// Character-level reader that skips whitespace.
struct Scanner<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|ch| ch.is_whitespace()).is_some() {}
    }

    fn char(&mut self, what: &'static str) -> Result<char, SetupError> {
        self.skip_whitespace();
        self.chars.next().ok_or(SetupError::UnexpectedEnd(what))
    }

    fn number(&mut self, what: &'static str) -> Result<usize, SetupError> {
        self.skip_whitespace();
        let mut digits = String::new();
        while let Some(ch) = self.chars.next_if(|ch| !ch.is_whitespace()) {
            digits.push(ch);
        }
        if digits.is_empty() {
            return Err(SetupError::UnexpectedEnd(what));
        }
        digits.parse().map_err(|_| SetupError::BadNumber(digits))
    }

    fn card(&mut self) -> Result<Card, SetupError> {
        let letter = self.char("card")?;
        CardLabel::from_letter(letter)
            .map(Card::new)
            .ok_or(SetupError::UnknownCard(letter))
    }
}
