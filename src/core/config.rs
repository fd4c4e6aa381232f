//! Roster configuration.
//!
//! A game is configured at startup by its seed set of characters:
//! - `CharacterConfig`: one seed entry (id, name, starting stats)
//! - `GameConfig`: the full seed set
//!
//! `GameConfig::default()` is the four-character reference roster. Every
//! new session and every reset seeds its roster from the same config, so a
//! reset always restores the identical starting lineup.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::character::CharacterId;
use super::error::{GameError, Result};

/// Fewest characters a playable roster may hold: the player plus one opponent.
pub const MIN_ROSTER_SIZE: usize = 2;

/// Seed entry for a single character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterConfig {
    /// Unique identifier.
    pub id: CharacterId,

    /// Display label.
    pub name: String,

    /// Starting health.
    pub health_points: i64,

    /// Starting attack power.
    pub attack_power: i64,

    /// Increment applied after each attack. `None` uses `attack_power`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack_multiplier: Option<i64>,

    /// Damage dealt back to an attacker.
    pub counter_attack_power: i64,
}

impl CharacterConfig {
    /// Create a seed entry.
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
            attack_multiplier: None,
            counter_attack_power,
        }
    }

    /// Set an explicit attack multiplier.
    #[must_use]
    pub fn with_multiplier(mut self, multiplier: i64) -> Self {
        self.attack_multiplier = Some(multiplier);
        self
    }

    /// Effective attack multiplier.
    #[must_use]
    pub fn multiplier(&self) -> i64 {
        self.attack_multiplier.unwrap_or(self.attack_power)
    }

    fn validate(&self) -> Result<()> {
        validate_stats(
            &self.id,
            self.health_points,
            self.attack_power,
            self.multiplier(),
            self.counter_attack_power,
        )
    }
}

/// Stat rules shared by configs and directly built rosters.
///
/// Health must be positive and no stat may be negative, so attack power
/// never shrinks. At least one of attack power and multiplier must be
/// positive, otherwise a battle against a zero-counter opponent never ends.
pub(crate) fn validate_stats(
    id: &CharacterId,
    health_points: i64,
    attack_power: i64,
    attack_multiplier: i64,
    counter_attack_power: i64,
) -> Result<()> {
    let invalid = |stat: &'static str, value: i64| GameError::InvalidStat {
        id: id.clone(),
        stat,
        value,
    };

    if health_points <= 0 {
        return Err(invalid("health_points", health_points));
    }
    if attack_power < 0 {
        return Err(invalid("attack_power", attack_power));
    }
    if attack_multiplier < 0 {
        return Err(invalid("attack_multiplier", attack_multiplier));
    }
    if counter_attack_power < 0 {
        return Err(invalid("counter_attack_power", counter_attack_power));
    }
    if attack_power == 0 && attack_multiplier == 0 {
        return Err(invalid("attack_power", attack_power));
    }
    Ok(())
}

/// Complete game configuration: the ordered seed set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed characters, in roster order.
    pub characters: Vec<CharacterConfig>,
}

impl GameConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            characters: Vec::new(),
        }
    }

    /// Add a character to the seed set.
    #[must_use]
    pub fn with_character(mut self, character: CharacterConfig) -> Self {
        self.characters.push(character);
        self
    }

    /// Get a seed entry by ID.
    #[must_use]
    pub fn get_character(&self, id: &CharacterId) -> Option<&CharacterConfig> {
        self.characters.iter().find(|c| &c.id == id)
    }

    /// Check the seed set is playable.
    ///
    /// Requires at least `MIN_ROSTER_SIZE` characters, unique ids, positive
    /// starting health, and non-negative attack, multiplier, and counter.
    pub fn validate(&self) -> Result<()> {
        if self.characters.len() < MIN_ROSTER_SIZE {
            return Err(GameError::RosterTooSmall {
                min: MIN_ROSTER_SIZE,
                actual: self.characters.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for character in &self.characters {
            if !seen.insert(&character.id) {
                return Err(GameError::DuplicateCharacter(character.id.clone()));
            }
            character.validate()?;
        }
        Ok(())
    }
}

impl Default for GameConfig {
    /// The reference roster.
    fn default() -> Self {
        Self::new()
            .with_character(CharacterConfig::new("obiwan", "Obi-Wan Kenobi", 120, 6, 12))
            .with_character(CharacterConfig::new("lukeSkywalker", "Luke Skywalker", 100, 6, 15))
            .with_character(CharacterConfig::new("darthSidious", "Darth Sidious", 150, 6, 20))
            .with_character(CharacterConfig::new("darthMaul", "Darth Maul", 180, 6, 20))
    }
}
