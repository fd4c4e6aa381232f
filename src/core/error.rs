//! Error types for the duel core.
//!
//! The taxonomy is deliberately narrow:
//! - `NotFound`: a character id that is not in the roster. This means the
//!   presentation layer and the core disagree about who is still in play,
//!   so it is returned to the caller instead of being swallowed.
//! - `InvalidTransition`: an event delivered to a state with no handler for
//!   it. The controller ignores these.
//! - Configuration errors raised while validating a `GameConfig` or building
//!   a `Roster`.

use super::character::{CharacterId, CombatantSlot};
use super::event::Event;
use super::phase::GameState;

/// Errors surfaced by the roster, the state machine, and configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("character `{0}` is not in the roster")]
    NotFound(CharacterId),

    #[error("event {event} is not accepted in state {state}")]
    InvalidTransition { state: GameState, event: Event },

    #[error("no {0} has been selected")]
    MissingCombatant(CombatantSlot),

    #[error("character id `{0}` appears more than once")]
    DuplicateCharacter(CharacterId),

    #[error("roster needs at least {min} characters, got {actual}")]
    RosterTooSmall { min: usize, actual: usize },

    #[error("character `{id}` has invalid {stat}: {value}")]
    InvalidStat {
        id: CharacterId,
        stat: &'static str,
        value: i64,
    },
}

impl GameError {
    /// True for events the active state does not handle.
    #[must_use]
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, GameError::InvalidTransition { .. })
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GameError>;
