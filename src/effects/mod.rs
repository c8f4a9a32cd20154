//! Card effects and damage.
//!
//! - `EffectResolver`: Executes the effect of each card label
//! - `PendingPlay`: A card detached from a hand, ready to execute
//! - `DamageResolver`: Health loss, self-healing, death, impressions,
//!   and post-death bonuses
//! - `DamageCause`: Hostility-ordered reason for damage
//!
//! Every function that can end the match returns [`crate::core::Resolution`],
//! so a match end propagates through nested effects with `?`.

mod damage;
mod executor;

pub use damage::{DamageCause, DamageResolver};
pub use executor::{EffectResolver, PendingPlay};
