//! # rust-duel
//!
//! Core of a turn-based duel game: the player picks a character, then fights
//! the remaining opponents one at a time until either their character or
//! every opponent is defeated.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: the state machine is a function
//!    `(GameState, Event, Session) -> (GameState, Session, Effects)`.
//!    It never calls into a UI.
//!
//! 2. **One owner**: `GameController` owns the only live session. Reset
//!    replaces it wholesale; there is no global game object.
//!
//! 3. **Run to completion**: each event is handled fully before the next.
//!    No threads, no locks, no async.
//!
//! ## Architecture
//!
//! - **Persistent roster**: the roster is an `im::Vector`, so the controller
//!   clones the session in O(1) before each transition and keeps the old one
//!   if the transition fails.
//!
//! - **Effects, not callbacks**: rendering, messages, and input toggles are
//!   `Effect` values applied through the `Presenter` trait.
//!
//! ## Modules
//!
//! - `core`: characters, roster, configuration, game states, events, errors
//! - `battle`: attack resolution and the win/loss/continue policy
//! - `rules`: the transition function and per-state entry effects
//! - `effects`: presentation effects and the `Presenter` trait
//! - `game`: session, input bindings, and the controller

pub mod core;
pub mod battle;
pub mod rules;
pub mod effects;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Character, CharacterId, CharacterConfig, CombatantSlot, GameConfig,
    GameError, Result,
    Event, GameResult, GameState,
    HealthEntry, Roster,
};

pub use crate::battle::{BattleOutcome, BattleReport, BattleResolver};

pub use crate::rules::Transition;

pub use crate::effects::{Effect, Effects, Presenter, RecordingPresenter, TracingPresenter};

pub use crate::game::{DispatchOutcome, GameController, InputBindings, Session};
