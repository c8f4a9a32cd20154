//! Interrupt resolution.
//!
//! Tricks (Dueling, Invasion, Arrows) open a response window in which any
//! living player may answer with Unbreakable. Responses nest: a counter can
//! itself be countered, and the outcome flips at each level.
//!
//! ## Example Usage
//!
//! ```
//! use pig_duel::cards::{Card, CardLabel, Hand};
//! use pig_duel::core::{MatchConfig, MatchState, Player, PlayerId, Role};
//! use pig_duel::policy::{DecisionPolicy, ScriptedPolicy, Stance};
//! use pig_duel::stack::CounterChase;
//!
//! let players = vec![
//!     Player::new(PlayerId::new(0), Role::Thief, 4, Hand::new()),
//!     Player::new(PlayerId::new(1), Role::Main, 4, Hand::from_letters("J").unwrap()),
//! ];
//! let mut state = MatchState::new(players, vec![Card::new(CardLabel::Peach)], MatchConfig::default()).unwrap();
//! let policies: Vec<Box<dyn DecisionPolicy>> = (0..2)
//!     .map(|_| Box::new(ScriptedPolicy::new()) as Box<dyn DecisionPolicy>)
//!     .collect();
//!
//! // The Main player shields itself from a hostile trick.
//! let blocked = CounterChase::is_blocked(&mut state, &policies, PlayerId::new(0), PlayerId::new(1), Stance::Hostile).unwrap();
//! assert!(blocked);
//! ```

mod counter;

pub use counter::CounterChase;
