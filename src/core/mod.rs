//! Core types: characters, the roster, configuration, game phases, input
//! events, errors.
//!
//! Health and attack power only change through `battle::BattleResolver`;
//! everything here is read-only to the outside apart from roster removal.

pub mod character;
pub mod config;
pub mod error;
pub mod event;
pub mod phase;
pub mod roster;

pub use character::{Character, CharacterId, CombatantSlot};
pub use config::{CharacterConfig, GameConfig, MIN_ROSTER_SIZE};
pub use error::{GameError, Result};
pub use event::Event;
pub use phase::{GameResult, GameState};
pub use roster::{HealthEntry, Roster};
