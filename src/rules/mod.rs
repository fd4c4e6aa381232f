//! Game-flow rules.
//!
//! The game is a finite-state machine driven by player input:
//! - `GameState`: which phase is active (defined in `core`)
//! - `Event`: the inputs the presentation layer raises (defined in `core`)
//! - `machine::transition`: pure `(state, event, session)` step that returns
//!   the next state, the new session, and presentation effects
//!
//! The machine never talks to the UI and never owns the session. See
//! `game::GameController` for the shell that commits transitions.

pub mod machine;

pub use crate::core::{Event, GameResult, GameState};
pub use machine::{transition, Transition};
