//! Damage application and its consequences.
//!
//! Applying damage is more than a health change:
//! 1. Health drops, then the victim eats Peaches while at or below zero
//! 2. A victim still at or below zero dies
//! 3. Deaths of the Main player or the last Thief end the match
//! 4. The attacker's impression is updated from the kind of attack
//! 5. Killing a Thief pays a bounty; the Main killing a Minister is punished

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::CardLabel;
use crate::core::{Camp, Halt, MatchState, PlayerId, Resolution, Role};

/// Why damage was dealt, ordered by hostility.
///
/// `DuelingFailed < Invading < Dueling < Killing`. Anything at or above
/// [`DamageCause::Dueling`] is an overt hostile act.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DamageCause {
    Undefined,
    DuelingFailed,
    Invading,
    Dueling,
    Killing,
}

impl DamageCause {
    /// Whether the act reveals the attacker's side.
    #[must_use]
    pub fn is_overt(self) -> bool {
        self >= DamageCause::Dueling
    }
}

/// Applies damage and everything that follows from it.
pub struct DamageResolver;

impl DamageResolver {
    /// Deal `amount` damage from `source` to `target`.
    ///
    /// A zero amount still runs impression inference; dueling opens with
    /// such a provocation. Returns `Err(Halt::Over(..))` when the match ends,
    /// in which case nothing after the deciding death is applied.
    pub fn apply(
        state: &mut MatchState,
        target: PlayerId,
        amount: i32,
        cause: DamageCause,
        source: PlayerId,
    ) -> Resolution {
        let died = {
            let victim = state.player_mut(target);
            let was_alive = victim.alive;
            victim.health -= amount;

            while victim.health <= 0 {
                if victim.hand.consume_first(CardLabel::Peach).is_none() {
                    break;
                }
                victim.health += 1;
                debug!(seat = target.0, health = victim.health, "peach eaten to survive");
            }

            if victim.health <= 0 {
                victim.alive = false;
            }
            was_alive && !victim.alive
        };

        debug!(
            seat = target.0,
            source = source.0,
            amount,
            ?cause,
            health = state.player(target).health,
            died,
            "damage applied"
        );

        let victim_role = state.player(target).role();

        if died {
            info!(seat = target.0, role = ?victim_role, source = source.0, "player died");
            match victim_role {
                Role::Main => return Err(Halt::Over(Camp::Hostile)),
                Role::Thief => {
                    if state.thief_died() == 0 {
                        return Err(Halt::Over(Camp::Loyal));
                    }
                }
                _ => {}
            }
        }

        Self::infer_attacker(state, target, cause, source);

        if died {
            Self::settle_death(state, victim_role, source);
        }

        Ok(())
    }

    /// Update the attacker's impression from an attack on `target`.
    fn infer_attacker(state: &mut MatchState, target: PlayerId, cause: DamageCause, source: PlayerId) {
        let victim = state.player(target);
        let victim_role = victim.role();
        let seen = victim.camp().negate();

        let attacker = state.player_mut(source);
        let mut changed = false;

        if victim_role == Role::Main
            && attacker.impression() == Role::Unrevealed
            && cause >= DamageCause::DuelingFailed
        {
            changed |= attacker.strengthen_impression(Role::Suspected);
        }
        if cause.is_overt() {
            changed |= attacker.strengthen_impression(seen);
        }

        if changed {
            debug!(seat = source.0, impression = ?attacker.impression(), "impression changed");
        }
    }

    /// Bounty for killing a Thief; penalty for the Main killing a Minister.
    fn settle_death(state: &mut MatchState, victim_role: Role, source: PlayerId) {
        match victim_role {
            Role::Thief => {
                let bounty = state.config().thief_bounty;
                state.draw_into(source, bounty);
                debug!(seat = source.0, bounty, "thief bounty drawn");
            }
            Role::Minister if state.player(source).role() == Role::Main => {
                let main = state.player_mut(source);
                main.hand.clear();
                main.weapon = false;
                debug!(seat = source.0, "main punished for killing a minister");
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Hand};
    use crate::core::{MatchConfig, Player};

    fn state(seats: &[(Role, &str)]) -> MatchState {
        let players = seats
            .iter()
            .enumerate()
            .map(|(i, &(role, letters))| {
                Player::new(PlayerId::new(i as u8), role, 4, Hand::from_letters(letters).unwrap())
            })
            .collect();
        let deck = Hand::from_letters("KDPW").unwrap().cards().to_vec();
        MatchState::new(players, deck, MatchConfig::default()).unwrap()
    }

    fn p(id: u8) -> PlayerId {
        PlayerId::new(id)
    }

    #[test]
    fn test_cause_order() {
        assert!(DamageCause::Undefined < DamageCause::DuelingFailed);
        assert!(DamageCause::DuelingFailed < DamageCause::Invading);
        assert!(DamageCause::Invading < DamageCause::Dueling);
        assert!(DamageCause::Dueling < DamageCause::Killing);
        assert!(DamageCause::Killing.is_overt());
        assert!(DamageCause::Dueling.is_overt());
        assert!(!DamageCause::Invading.is_overt());
    }

    #[test]
    fn test_plain_damage() {
        let mut s = state(&[(Role::Main, ""), (Role::Thief, ""), (Role::Thief, "")]);
        DamageResolver::apply(&mut s, p(0), 1, DamageCause::Killing, p(1)).unwrap();
        assert_eq!(s.player(p(0)).health, 3);
        assert!(s.player(p(0)).alive);
    }

    #[test]
    fn test_peach_saves_from_death() {
        let mut s = state(&[(Role::Main, ""), (Role::Minister, "KP"), (Role::Thief, "")]);
        s.player_mut(p(1)).health = 1;

        DamageResolver::apply(&mut s, p(1), 1, DamageCause::Invading, p(2)).unwrap();

        assert!(s.player(p(1)).alive);
        assert_eq!(s.player(p(1)).health, 1);
        assert_eq!(s.player(p(1)).hand.letters(), "K");
    }

    #[test]
    fn test_main_death_ends_match() {
        let mut s = state(&[(Role::Main, ""), (Role::Thief, "")]);
        s.player_mut(p(0)).health = 1;

        let result = DamageResolver::apply(&mut s, p(0), 1, DamageCause::Killing, p(1));

        assert_eq!(result, Err(Halt::Over(Camp::Hostile)));
        assert!(!s.player(p(0)).alive);
    }

    #[test]
    fn test_last_thief_death_ends_match() {
        let mut s = state(&[(Role::Main, ""), (Role::Thief, "")]);
        s.player_mut(p(1)).health = 1;

        let result = DamageResolver::apply(&mut s, p(1), 1, DamageCause::Killing, p(0));

        assert_eq!(result, Err(Halt::Over(Camp::Loyal)));
        assert_eq!(s.thief_count(), 0);
        // Nothing after the deciding death runs: no bounty.
        assert!(s.player(p(0)).hand.is_empty());
    }

    #[test]
    fn test_thief_bounty() {
        let mut s = state(&[(Role::Main, ""), (Role::Thief, ""), (Role::Thief, "")]);
        s.player_mut(p(1)).health = 1;

        DamageResolver::apply(&mut s, p(1), 1, DamageCause::Killing, p(0)).unwrap();

        assert_eq!(s.thief_count(), 1);
        assert_eq!(s.player(p(0)).hand.letters(), "K D P");
    }

    #[test]
    fn test_main_killing_minister_is_punished() {
        let mut s = state(&[(Role::Main, "KKD"), (Role::Minister, ""), (Role::Thief, "")]);
        s.player_mut(p(0)).weapon = true;
        s.player_mut(p(1)).health = 1;

        DamageResolver::apply(&mut s, p(1), 1, DamageCause::Killing, p(0)).unwrap();

        assert!(!s.player(p(1)).alive);
        assert!(s.player(p(0)).hand.is_empty());
        assert!(!s.player(p(0)).weapon);
    }

    #[test]
    fn test_hurting_main_makes_suspect() {
        let mut s = state(&[(Role::Main, ""), (Role::Thief, ""), (Role::Thief, "")]);

        DamageResolver::apply(&mut s, p(0), 1, DamageCause::Invading, p(1)).unwrap();

        assert_eq!(s.player(p(1)).impression(), Role::Suspected);
    }

    #[test]
    fn test_overt_attack_on_main_reveals_thief() {
        let mut s = state(&[(Role::Main, ""), (Role::Thief, ""), (Role::Thief, "")]);

        DamageResolver::apply(&mut s, p(0), 1, DamageCause::Killing, p(1)).unwrap();

        assert_eq!(s.player(p(1)).impression(), Role::Thief);
    }

    #[test]
    fn test_provocation_infers_without_damage() {
        let mut s = state(&[(Role::Main, ""), (Role::Minister, ""), (Role::Thief, "")]);
        s.player_mut(p(2)).strengthen_impression(Role::Thief);

        DamageResolver::apply(&mut s, p(2), 0, DamageCause::Dueling, p(1)).unwrap();

        assert_eq!(s.player(p(2)).health, 4);
        assert_eq!(s.player(p(1)).impression(), Role::Minister);
    }

    #[test]
    fn test_attack_on_hidden_player_reveals_nothing() {
        let mut s = state(&[(Role::Main, ""), (Role::Minister, ""), (Role::Thief, "")]);

        DamageResolver::apply(&mut s, p(1), 1, DamageCause::Killing, p(2)).unwrap();

        assert_eq!(s.player(p(2)).impression(), Role::Unrevealed);
    }
}
