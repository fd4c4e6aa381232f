//! Attack resolution - one exchange between attacker and defender.
//!
//! An exchange runs in a fixed order:
//! 1. The defender loses the attacker's current attack power.
//! 2. The attacker loses the defender's counter-attack power.
//! 3. The attacker's attack power grows by its multiplier.
//!
//! The growth happens after both hits, so it only affects later rounds. It
//! applies even on the blow that ends the fight.

use serde::{Deserialize, Serialize};

use crate::core::{Character, CharacterId};

/// Record of one resolved exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub attacker: CharacterId,
    pub attacker_name: String,
    pub defender: CharacterId,
    pub defender_name: String,
    /// Damage the attacker dealt.
    pub damage_dealt: i64,
    /// Damage the defender dealt back.
    pub counter_damage: i64,
    /// Attacker health after the exchange.
    pub attacker_health: i64,
    /// Defender health after the exchange.
    pub defender_health: i64,
}

impl BattleReport {
    /// Human-readable summary shown as battle text.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "You attack {} for {} damage.  {} counters for {} damage.",
            self.defender_name, self.damage_dealt, self.defender_name, self.counter_damage
        )
    }
}

impl std::fmt::Display for BattleReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Resolves attacks between two characters.
pub struct BattleResolver;

impl BattleResolver {
    /// Resolve one attack exchange.
    ///
    /// Never fails. Callers check `is_defeated()` on both sides afterwards.
    pub fn resolve_attack(attacker: &mut Character, defender: &mut Character) -> BattleReport {
        let damage_dealt = attacker.attack_power();
        let counter_damage = defender.counter_attack_power();

        defender.take_damage(damage_dealt);
        attacker.take_damage(counter_damage);
        attacker.escalate_attack();

        tracing::debug!(
            attacker = %attacker.id(),
            defender = %defender.id(),
            damage_dealt,
            counter_damage,
            attacker_health = attacker.health_points(),
            defender_health = defender.health_points(),
            "Battle: {} vs {}",
            attacker.name(),
            defender.name()
        );

        BattleReport {
            attacker: attacker.id().clone(),
            attacker_name: attacker.name().to_string(),
            defender: defender.id().clone(),
            defender_name: defender.name().to_string(),
            damage_dealt,
            counter_damage,
            attacker_health: attacker.health_points(),
            defender_health: defender.health_points(),
        }
    }
}
