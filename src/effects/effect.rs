//! Effect definitions.
//!
//! Effects are instructions for the presentation layer. Transitions return
//! them instead of calling into the UI, which keeps the state machine pure
//! and testable without one.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CharacterId, CombatantSlot, HealthEntry, Roster};

/// A single presentation-layer instruction.
///
/// ## Board
///
/// - `RenderRoster`: draw every character in the roster
/// - `UpdateHealthDisplay`: refresh health labels
/// - `RemoveCharacterView`: drop a defeated character
/// - `PlaceCombatant`: move a character into the attacker/defender slot
/// - `ShowCombatantSlots`: reveal the attacker/defender slots
/// - `ClearBoard`: tear everything down before a reset
///
/// ## Text
///
/// - `SetMessage`, `SetMessageFlashing`: the instruction line
/// - `ShowBattleText`: exchange summary, empty string clears it
/// - `ShowWin`, `ShowLoss`: end-of-game banners
///
/// ## Input
///
/// - `EnableSelection` / `DisableSelection`: character clicks
/// - `EnableAttackInput` / `DisableAttackInput`: the attack button
/// - `ShowResetInput`: the reset button
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    // === Board ===
    RenderRoster(Roster),
    UpdateHealthDisplay(Vec<HealthEntry>),
    RemoveCharacterView(CharacterId),
    PlaceCombatant {
        id: CharacterId,
        slot: CombatantSlot,
    },
    ShowCombatantSlots,
    ClearBoard,

    // === Text ===
    SetMessage(String),
    SetMessageFlashing(bool),
    ShowBattleText(String),
    ShowWin,
    ShowLoss,

    // === Input ===
    EnableSelection(Vec<CharacterId>),
    DisableSelection,
    EnableAttackInput,
    DisableAttackInput,
    ShowResetInput,
}

impl Effect {
    /// Set the instruction line.
    pub fn message(text: impl Into<String>) -> Self {
        Self::SetMessage(text.into())
    }

    /// Show an exchange summary.
    pub fn battle_text(text: impl Into<String>) -> Self {
        Self::ShowBattleText(text.into())
    }

    /// Clear the battle text.
    #[must_use]
    pub fn clear_battle_text() -> Self {
        Self::ShowBattleText(String::new())
    }
}

/// Effects produced by one transition, in the order they must be applied.
pub type Effects = SmallVec<[Effect; 8]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Effect::message("FIGHT!!!"), Effect::SetMessage("FIGHT!!!".to_string()));
        assert_eq!(Effect::battle_text("hit"), Effect::ShowBattleText("hit".to_string()));
        assert_eq!(Effect::clear_battle_text(), Effect::ShowBattleText(String::new()));
    }

    #[test]
    fn test_serialization() {
        let effect = Effect::PlaceCombatant {
            id: CharacterId::new("darthMaul"),
            slot: CombatantSlot::Attacker,
        };
        let json = serde_json::to_string(&effect).unwrap();
        let back: Effect = serde_json::from_str(&json).unwrap();
        assert_eq!(back, effect);
    }
}
