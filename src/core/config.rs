//! Match configuration.
//!
//! The rule constants live here rather than being scattered through the
//! engine. Defaults match the standard rules.

use serde::{Deserialize, Serialize};

/// Tunable rule constants.
///
/// ## Example
///
/// ```
/// use pig_duel::core::MatchConfig;
///
/// let config = MatchConfig::default().with_turn_draw(3);
/// assert_eq!(config.max_health, 4);
/// assert_eq!(config.turn_draw, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Health cap and starting health.
    pub max_health: i32,

    /// Cards drawn at the start of each turn.
    pub turn_draw: usize,

    /// Cards drawn by whoever kills a Thief.
    pub thief_bounty: usize,

    /// Starting hand size in the text setup format.
    pub hand_size: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_health: 4,
            turn_draw: 2,
            thief_bounty: 3,
            hand_size: 4,
        }
    }
}

impl MatchConfig {
    #[must_use]
    pub fn with_max_health(mut self, max_health: i32) -> Self {
        self.max_health = max_health;
        self
    }

    #[must_use]
    pub fn with_turn_draw(mut self, turn_draw: usize) -> Self {
        self.turn_draw = turn_draw;
        self
    }

    #[must_use]
    pub fn with_thief_bounty(mut self, thief_bounty: usize) -> Self {
        self.thief_bounty = thief_bounty;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }
}
