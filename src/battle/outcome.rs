//! What happens after an exchange: keep fighting, next opponent, or game over.

use serde::{Deserialize, Serialize};

use crate::core::{CharacterId, Result, Roster};

/// Result of evaluating the roster after an exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleOutcome {
    /// Both combatants still stand.
    Continue,
    /// The defender fell and opponents remain.
    DefenderDefeated,
    /// The defender fell and was the last opponent.
    Won,
    /// The attacker fell. Takes precedence over a simultaneous defender defeat.
    Lost,
}

impl BattleOutcome {
    /// Evaluate the roster after an exchange.
    ///
    /// The attacker is checked first, so a double knockout is a loss. A
    /// defeated defender is still in `roster` at this point; the roster is
    /// won if removing it would leave a single character.
    pub fn evaluate(roster: &Roster, attacker: &CharacterId, defender: &CharacterId) -> Result<Self> {
        let attacker = roster.get(attacker)?;
        let defender = roster.get(defender)?;

        if attacker.is_defeated() {
            return Ok(BattleOutcome::Lost);
        }
        if defender.is_defeated() {
            let remaining = roster.len().saturating_sub(1);
            return Ok(if remaining > 1 {
                BattleOutcome::DefenderDefeated
            } else {
                BattleOutcome::Won
            });
        }
        Ok(BattleOutcome::Continue)
    }

    /// True if the game ends with this outcome.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, BattleOutcome::Won | BattleOutcome::Lost)
    }
}
