//! Session orchestration.
//!
//! - `Session`: roster plus the chosen attacker and defender
//! - `InputBindings`: the one live set of accepted inputs
//! - `GameController`: owns the session, dispatches events, resets

mod bindings;
mod controller;
mod session;

pub use bindings::InputBindings;
pub use controller::{DispatchOutcome, GameController};
pub use crate::core::CombatantSlot;
pub use session::Session;
