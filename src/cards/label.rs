//! The closed card catalog.
//!
//! Every card is identified only by its label. Cards carry no instance
//! state, so a `Card` is a small `Copy` value that can be detached from a
//! hand before its effect runs.

use serde::{Deserialize, Serialize};

/// Card label from the fixed catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardLabel {
    /// Heal one point.
    Peach,
    /// Basic attack, answered by Dodge.
    Killing,
    /// Negates a Killing. Reactive only.
    Dodge,
    /// Weapon allowing more than one Killing per turn.
    Crossbow,
    /// Alternating-discard duel.
    Dueling,
    /// Area attack, answered by Killing.
    Invasion,
    /// Area attack, answered by Dodge.
    Arrows,
    /// Counter-trick. Reactive only.
    Unbreakable,
    /// Diagnostic no-op.
    Test,
}

impl CardLabel {
    /// All labels, in catalog order.
    pub const ALL: [CardLabel; 9] = [
        CardLabel::Peach,
        CardLabel::Killing,
        CardLabel::Dodge,
        CardLabel::Crossbow,
        CardLabel::Dueling,
        CardLabel::Invasion,
        CardLabel::Arrows,
        CardLabel::Unbreakable,
        CardLabel::Test,
    ];

    /// Single-letter code used by the setup format and snapshots.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            CardLabel::Peach => 'P',
            CardLabel::Killing => 'K',
            CardLabel::Dodge => 'D',
            CardLabel::Crossbow => 'Z',
            CardLabel::Dueling => 'F',
            CardLabel::Invasion => 'N',
            CardLabel::Arrows => 'W',
            CardLabel::Unbreakable => 'J',
            CardLabel::Test => 'T',
        }
    }

    /// Inverse of [`CardLabel::letter`].
    #[must_use]
    pub fn from_letter(ch: char) -> Option<CardLabel> {
        CardLabel::ALL.into_iter().find(|label| label.letter() == ch)
    }
}

/// A single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    label: CardLabel,
}

impl Card {
    /// Create a card with the given label.
    #[must_use]
    pub const fn new(label: CardLabel) -> Self {
        Self { label }
    }

    /// The card's label.
    #[must_use]
    pub const fn label(self) -> CardLabel {
        self.label
    }
}

impl From<CardLabel> for Card {
    fn from(label: CardLabel) -> Self {
        Card::new(label)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label.letter())
    }
}
