//! The live roster of characters still in play.
//!
//! Backed by an `im::Vector` so a session clones in O(1); the state machine
//! takes sessions by value and the controller keeps the previous one until
//! a transition succeeds.
//!
//! ## Usage
//!
//! ```
//! use rust_duel::core::{CharacterId, GameConfig, Roster};
//!
//! let mut roster = Roster::from_config(&GameConfig::default()).unwrap();
//! assert_eq!(roster.len(), 4);
//!
//! let obiwan = CharacterId::new("obiwan");
//! assert_eq!(roster.get(&obiwan).unwrap().health_points(), 120);
//!
//! roster.remove(&obiwan);
//! assert!(roster.get(&obiwan).is_err());
//! // Removing again is a no-op.
//! assert!(roster.remove(&obiwan).is_none());
//! ```

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::character::{Character, CharacterId};
use super::config::{validate_stats, GameConfig, MIN_ROSTER_SIZE};
use super::error::{GameError, Result};

/// Health of one character as shown to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthEntry {
    pub id: CharacterId,
    /// Clamped at zero.
    pub health_points: i64,
}

/// Ordered collection of characters, unique by id.
///
/// Characters are removed when defeated and never come back. Order is the
/// seed order and is preserved across removals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    characters: Vector<Character>,
}

impl Roster {
    /// Seed a roster from a validated configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        Self::from_characters(config.characters.iter().map(Character::from_config))
    }

    /// Build a roster from characters.
    ///
    /// Applies the same rules as `GameConfig::validate`: unique ids, sane
    /// stats, and at least `MIN_ROSTER_SIZE` characters.
    pub fn from_characters(characters: impl IntoIterator<Item = Character>) -> Result<Self> {
        let mut seen = FxHashSet::default();
        let mut roster = Vector::new();
        for character in characters {
            if !seen.insert(character.id().clone()) {
                return Err(GameError::DuplicateCharacter(character.id().clone()));
            }
            validate_stats(
                character.id(),
                character.health_points(),
                character.attack_power(),
                character.attack_multiplier(),
                character.counter_attack_power(),
            )?;
            roster.push_back(character);
        }
        if roster.len() < MIN_ROSTER_SIZE {
            return Err(GameError::RosterTooSmall {
                min: MIN_ROSTER_SIZE,
                actual: roster.len(),
            });
        }
        Ok(Self { characters: roster })
    }

    /// Look up a character by id.
    pub fn get(&self, id: &CharacterId) -> Result<&Character> {
        self.characters
            .iter()
            .find(|c| c.id() == id)
            .ok_or_else(|| GameError::NotFound(id.clone()))
    }

    pub(crate) fn get_mut(&mut self, id: &CharacterId) -> Result<&mut Character> {
        self.characters
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or_else(|| GameError::NotFound(id.clone()))
    }

    fn position(&self, id: &CharacterId) -> Option<usize> {
        self.characters.iter().position(|c| c.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &CharacterId) -> bool {
        self.position(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Iterate over characters in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }

    /// Iterate over ids in roster order.
    pub fn ids(&self) -> impl Iterator<Item = &CharacterId> {
        self.characters.iter().map(Character::id)
    }

    /// Remove a character. Returns `None` if it was not present.
    pub fn remove(&mut self, id: &CharacterId) -> Option<Character> {
        let index = self.position(id)?;
        Some(self.characters.remove(index))
    }

    /// Ids of every character except `excluded`, in roster order.
    #[must_use]
    pub fn candidates_excluding(&self, excluded: &CharacterId) -> Vec<CharacterId> {
        self.ids().filter(|id| *id != excluded).cloned().collect()
    }

    /// True when `id` is the only character left.
    #[must_use]
    pub fn is_sole_survivor(&self, id: &CharacterId) -> bool {
        self.len() == 1 && self.contains(id)
    }

    /// Displayed health for every character, in roster order.
    #[must_use]
    pub fn health_snapshot(&self) -> Vec<HealthEntry> {
        self.iter()
            .map(|c| HealthEntry {
                id: c.id().clone(),
                health_points: c.displayed_health(),
            })
            .collect()
    }
}
