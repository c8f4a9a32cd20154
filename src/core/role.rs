//! Roles, camps, and the provoke/flatter tables.
//!
//! A player's true `Role` is fixed at setup. Their *impression* uses the same
//! enum but starts weaker (usually `Unrevealed`) and only ever strengthens.
//!
//! ## Reveal strength
//!
//! Impressions merge by reveal strength:
//! `Unrevealed < Suspected < Thief < Minister < Main`.
//! `Thief` is the lowest rank that counts as a shown identity.

use serde::{Deserialize, Serialize};

use super::error::RuleError;

/// A true role or a public impression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Nothing shown yet.
    Unrevealed,
    /// Hurt the Main player without otherwise showing a side.
    Suspected,
    /// Hostile minority.
    Thief,
    /// Loyal majority.
    Minister,
    /// Loyal leader. Exactly one per match, always public.
    Main,
}

/// Lowest impression at which a player counts as having shown an identity.
pub const LEAST_SHOWN: Role = Role::Thief;

impl Role {
    /// Rank used when merging impressions.
    #[must_use]
    pub const fn reveal_strength(self) -> u8 {
        match self {
            Role::Unrevealed => 0,
            Role::Suspected => 1,
            Role::Thief => 2,
            Role::Minister => 3,
            Role::Main => 4,
        }
    }

    /// Whether this impression has reached the shown-identity threshold.
    #[must_use]
    pub const fn is_shown(self) -> bool {
        self.reveal_strength() >= LEAST_SHOWN.reveal_strength()
    }

    /// Whether this can be a player's true role.
    #[must_use]
    pub const fn is_concrete(self) -> bool {
        matches!(self, Role::Thief | Role::Minister | Role::Main)
    }

    /// Thief and Minister swap; everything else has no opposite.
    #[must_use]
    pub const fn negate(self) -> Role {
        match self {
            Role::Thief => Role::Minister,
            Role::Minister => Role::Thief,
            _ => Role::Unrevealed,
        }
    }

    /// The stronger of two impressions. Ties keep `self`.
    #[must_use]
    pub fn strongest(self, other: Role) -> Role {
        if other.reveal_strength() > self.reveal_strength() {
            other
        } else {
            self
        }
    }

    /// Whether a player whose true role is `self` may act hostile toward
    /// someone currently impressed as `other`.
    pub fn can_provoke(self, other: Role) -> Result<bool, RuleError> {
        match self {
            Role::Main => Ok(matches!(other, Role::Thief | Role::Suspected)),
            Role::Minister => Ok(other == Role::Thief),
            Role::Thief => Ok(matches!(other, Role::Main | Role::Minister)),
            Role::Unrevealed | Role::Suspected => Err(RuleError::UnresolvedRole(self)),
        }
    }

    /// Whether a player whose true role is `self` may act friendly toward
    /// someone currently impressed as `other`.
    pub fn can_flatter(self, other: Role) -> Result<bool, RuleError> {
        match self {
            Role::Main | Role::Minister => Ok(matches!(other, Role::Minister | Role::Main)),
            Role::Thief => Ok(other == Role::Thief),
            Role::Unrevealed | Role::Suspected => Err(RuleError::UnresolvedRole(self)),
        }
    }

    /// Role for the leading letter of a setup token (`MP`, `ZP`, `FP`).
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Role> {
        match letter {
            'M' => Some(Role::Main),
            'Z' => Some(Role::Minister),
            'F' => Some(Role::Thief),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::Unrevealed => "?",
            Role::Suspected => "suspected",
            Role::Thief => "FP",
            Role::Minister => "ZP",
            Role::Main => "MP",
        };
        f.write_str(s)
    }
}

/// The side that wins a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Camp {
    /// Main and Ministers.
    Loyal,
    /// Thieves.
    Hostile,
}

impl std::fmt::Display for Camp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Camp::Loyal => f.write_str("MP"),
            Camp::Hostile => f.write_str("FP"),
        }
    }
}
