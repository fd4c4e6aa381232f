//! Characters and their identifiers.
//!
//! A `Character` carries four combat stats:
//! - `health_points`: drops as damage is taken; defeated at `<= 0`
//! - `attack_power`: damage dealt by the next attack
//! - `attack_multiplier`: added to `attack_power` after every attack made
//! - `counter_attack_power`: damage dealt back to whoever attacks
//!
//! Only the battle resolver changes health and attack power. Everything
//! else is fixed when the character is created.
//!
//! ## Usage
//!
//! ```
//! use rust_duel::core::{Character, CharacterId};
//!
//! let maul = Character::new("darthMaul", "Darth Maul", 180, 6, 20);
//!
//! assert_eq!(maul.id(), &CharacterId::new("darthMaul"));
//! // Without an explicit multiplier, attack grows by the starting attack.
//! assert_eq!(maul.attack_multiplier(), 6);
//! assert!(!maul.is_defeated());
//! ```

use serde::{Deserialize, Serialize};

use super::config::CharacterConfig;

/// Stable, unique identifier for a character.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(String);

impl CharacterId {
    /// Create a new character ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CharacterId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CharacterId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A combatant in the roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    id: CharacterId,
    name: String,
    health_points: i64,
    attack_power: i64,
    attack_multiplier: i64,
    counter_attack_power: i64,
}

impl Character {
    /// Create a character whose attack multiplier equals its starting attack.
    pub fn new(
        id: impl Into<CharacterId>,
        name: impl Into<String>,
        health_points: i64,
        attack_power: i64,
        counter_attack_power: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            health_points,
            attack_power,
            attack_multiplier: attack_power,
            counter_attack_power,
        }
    }

    /// Override the attack multiplier.
    #[must_use]
    pub fn with_multiplier(mut self, attack_multiplier: i64) -> Self {
        self.attack_multiplier = attack_multiplier;
        self
    }

    /// Build a character from its seed entry.
    #[must_use]
    pub fn from_config(config: &CharacterConfig) -> Self {
        Self::new(
            config.id.clone(),
            config.name.clone(),
            config.health_points,
            config.attack_power,
            config.counter_attack_power,
        )
        .with_multiplier(config.multiplier())
    }

    #[must_use]
    pub fn id(&self) -> &CharacterId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn health_points(&self) -> i64 {
        self.health_points
    }

    #[must_use]
    pub fn attack_power(&self) -> i64 {
        self.attack_power
    }

    #[must_use]
    pub fn attack_multiplier(&self) -> i64 {
        self.attack_multiplier
    }

    #[must_use]
    pub fn counter_attack_power(&self) -> i64 {
        self.counter_attack_power
    }

    /// A character is out of the fight once health reaches zero.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health_points <= 0
    }

    /// Health as shown to the player. Never below zero.
    #[must_use]
    pub fn displayed_health(&self) -> i64 {
        self.health_points.max(0)
    }

    /// Subtract `amount` from health. Health may go negative.
    pub(crate) fn take_damage(&mut self, amount: i64) {
        self.health_points = self.health_points.saturating_sub(amount);
    }

    /// Grow attack power by the multiplier after an attack.
    pub(crate) fn escalate_attack(&mut self) {
        self.attack_power = self.attack_power.saturating_add(self.attack_multiplier);
    }
}

/// Which side of the fight a character occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatantSlot {
    /// The player's character.
    Attacker,
    /// The current opponent.
    Defender,
}

impl std::fmt::Display for CombatantSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CombatantSlot::Attacker => f.write_str("attacker"),
            CombatantSlot::Defender => f.write_str("defender"),
        }
    }
}
