//! # pig-duel
//!
//! A deterministic rule engine for a hidden-role card duel.
//!
//! One Main player, some Ministers and some Thieves sit in a ring. Each
//! player knows only their own role; everybody else sees an *impression*
//! that strengthens as the player attacks or helps others. The loyal camp
//! wins when every Thief is dead, the hostile camp when the Main player is.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: No randomness. The draw queue is fixed at setup
//!    and every decision comes from a policy.
//!
//! 2. **Pluggable Strategy**: Each seat holds a boxed
//!    [`policy::DecisionPolicy`]. Policies read the state and return hand
//!    positions; only the engine mutates.
//!
//! 3. **Errors Are Values**: Match end and rule defects both travel as
//!    `Err` through `?`, so nested effects unwind without flags.
//!
//! ## Modules
//!
//! - `core`: Roles, players, match state, configuration, setup, errors
//! - `cards`: Card labels and hands
//! - `policy`: Decision policies and the scripted default
//! - `stack`: Counter chase for Unbreakable responses
//! - `effects`: Card effects and damage resolution
//! - `rules`: Turn and round driver

pub mod core;
pub mod cards;
pub mod policy;
pub mod stack;
pub mod effects;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Camp, Role, LEAST_SHOWN,
    Player, PlayerId,
    MatchConfig, MatchSetup, SeatSetup, SetupError,
    MatchState, SeatView, Snapshot,
    Halt, Resolution, RuleError,
};

pub use crate::cards::{Card, CardLabel, Hand};

pub use crate::policy::{CounterContext, DecisionPolicy, ScriptedPolicy, Stance, TurnAction};

pub use crate::stack::CounterChase;

pub use crate::effects::{DamageCause, DamageResolver, EffectResolver, PendingPlay};

pub use crate::rules::{Match, RoundOutcome};
