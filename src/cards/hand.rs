//! Ordered hand of cards.
//!
//! Order matters: the leftmost eligible card is always the one chosen.
//! Removal returns the card by value, so callers never hold a reference
//! into the hand across a mutation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::label::{Card, CardLabel};

/// A player's hand.
///
/// SmallVec keeps typical hands (4-8 cards) off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 8]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in hand order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Card at a position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<Card> {
        self.cards.get(position).copied()
    }

    /// Add a card at the right end.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Position of the leftmost card with `label`.
    #[must_use]
    pub fn find_first(&self, label: CardLabel) -> Option<usize> {
        self.cards.iter().position(|card| card.label() == label)
    }

    /// Whether any card with `label` is held.
    #[must_use]
    pub fn contains(&self, label: CardLabel) -> bool {
        self.find_first(label).is_some()
    }

    /// Number of cards with `label`.
    #[must_use]
    pub fn count(&self, label: CardLabel) -> usize {
        self.cards.iter().filter(|card| card.label() == label).count()
    }

    /// Remove and return the leftmost card with `label`.
    pub fn consume_first(&mut self, label: CardLabel) -> Option<Card> {
        let position = self.find_first(label)?;
        self.remove_at(position)
    }

    /// Remove and return the card at `position`.
    ///
    /// Returns `None` if the position is out of range.
    pub fn remove_at(&mut self, position: usize) -> Option<Card> {
        if position < self.cards.len() {
            Some(self.cards.remove(position))
        } else {
            None
        }
    }

    /// Discard the whole hand.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Parse card letters (`"K D P"` or `"KDP"`). Whitespace is ignored.
    #[must_use]
    pub fn from_letters(letters: &str) -> Option<Hand> {
        letters
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(|ch| CardLabel::from_letter(ch).map(Card::new))
            .collect()
    }

    /// Letters of the held cards, space separated.
    #[must_use]
    pub fn letters(&self) -> String {
        self.cards
            .iter()
            .map(|card| card.label().letter().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<CardLabel> for Hand {
    fn from_iter<I: IntoIterator<Item = CardLabel>>(iter: I) -> Self {
        iter.into_iter().map(Card::new).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CardLabel::*;

    fn hand(labels: &[CardLabel]) -> Hand {
        labels.iter().copied().collect()
    }

    #[test]
    fn test_find_first_scans_left_to_right() {
        let h = hand(&[Dodge, Killing, Peach, Killing]);
        assert_eq!(h.find_first(Killing), Some(1));
        assert_eq!(h.find_first(Peach), Some(2));
        assert_eq!(h.find_first(Arrows), None);
    }

    #[test]
    fn test_consume_first_removes_leftmost() {
        let mut h = hand(&[Killing, Dodge, Killing]);
        let card = h.consume_first(Killing);
        assert_eq!(card, Some(Card::new(Killing)));
        assert_eq!(h.cards(), &[Card::new(Dodge), Card::new(Killing)]);
    }

    #[test]
    fn test_consume_first_absent() {
        let mut h = hand(&[Dodge]);
        assert_eq!(h.consume_first(Unbreakable), None);
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut h = hand(&[Dodge]);
        assert_eq!(h.remove_at(3), None);
        assert_eq!(h.remove_at(0), Some(Card::new(Dodge)));
        assert!(h.is_empty());
    }

    #[test]
    fn test_letters_and_count() {
        let h = hand(&[Peach, Killing, Killing]);
        assert_eq!(h.letters(), "P K K");
        assert_eq!(h.count(Killing), 2);
        assert!(h.contains(Peach));
    }

    #[test]
    fn test_from_letters() {
        assert_eq!(Hand::from_letters("K D  P"), Some(hand(&[Killing, Dodge, Peach])));
        assert_eq!(Hand::from_letters("KJ"), Some(hand(&[Killing, Unbreakable])));
        assert_eq!(Hand::from_letters(""), Some(Hand::new()));
        assert_eq!(Hand::from_letters("KX"), None);
    }

    #[test]
    fn test_hand_serialization() {
        let h = hand(&[Invasion, Unbreakable]);
        let json = serde_json::to_string(&h).unwrap();
        let back: Hand = serde_json::from_str(&json).unwrap();
        assert_eq!(h, back);
    }
}
