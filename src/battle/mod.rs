//! Battle resolution and the win/loss/continuation policy.
//!
//! - `BattleResolver`: applies one attack exchange to two characters
//! - `BattleReport`: what happened in that exchange
//! - `BattleOutcome`: whether the fight goes on, moves to the next
//!   opponent, or ends the game

mod outcome;
mod resolver;

pub use outcome::BattleOutcome;
pub use resolver::{BattleReport, BattleResolver};
