//! Player identification and per-seat player data.
//!
//! ## PlayerId
//!
//! Fixed seat index, 0-based. Seats never move: death is a flag, so
//! targeting adjacency stays stable for the whole match.
//!
//! ## Player
//!
//! Health, true role, public impression, weapon flag, and hand.

use serde::{Deserialize, Serialize};

use super::role::Role;
use crate::cards::Hand;

/// Seat identifier supporting up to 255 players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats for a match with `player_count` players.
    ///
    /// ```
    /// use pig_duel::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat index.
    pub id: PlayerId,

    /// Current health. May dip to zero or below while death is resolved.
    pub health: i32,

    /// Upper bound for `health`.
    pub max_health: i32,

    role: Role,

    impression: Role,

    /// Dead players keep their seat.
    pub alive: bool,

    /// Crossbow equipped.
    pub weapon: bool,

    /// Cards held, in order.
    pub hand: Hand,
}

impl Player {
    /// Create a player at full health.
    ///
    /// The Main player's impression is public from the start; everyone
    /// else begins unrevealed.
    #[must_use]
    pub fn new(id: PlayerId, role: Role, max_health: i32, hand: Hand) -> Self {
        let impression = if role == Role::Main {
            Role::Main
        } else {
            Role::Unrevealed
        };
        Self {
            id,
            health: max_health,
            max_health,
            role,
            impression,
            alive: true,
            weapon: false,
            hand,
        }
    }

    /// True role. Fixed for the whole match.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Publicly inferred role.
    #[must_use]
    pub fn impression(&self) -> Role {
        self.impression
    }

    /// Merge `seen` into the impression, keeping the stronger value.
    ///
    /// Returns true if the impression changed.
    pub fn strengthen_impression(&mut self, seen: Role) -> bool {
        let merged = self.impression.strongest(seen);
        let changed = merged != self.impression;
        self.impression = merged;
        changed
    }

    /// What flattering this player says about the flatterer.
    ///
    /// Hostility toward this player implies the negation.
    #[must_use]
    pub fn camp(&self) -> Role {
        if self.role == Role::Main || self.impression == Role::Minister {
            Role::Minister
        } else if self.impression == Role::Thief {
            Role::Thief
        } else {
            Role::Unrevealed
        }
    }

    /// Whether health is below the maximum.
    #[must_use]
    pub fn is_wounded(&self) -> bool {
        self.health < self.max_health
    }
}
