//! A single play-through: the roster plus the two combatants.

use serde::{Deserialize, Serialize};

use crate::battle::{BattleOutcome, BattleReport, BattleResolver};
use crate::core::{
    Character, CharacterId, CombatantSlot, GameConfig, GameError, Result, Roster,
};

/// Session data shared by every state.
///
/// The attacker is fixed once chosen. The defender changes each round and
/// is cleared when defeated. Cloning is O(1) thanks to the persistent
/// roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    roster: Roster,
    attacker: Option<CharacterId>,
    defender: Option<CharacterId>,
}

impl Session {
    /// Fresh session with a newly seeded roster.
    pub fn new(config: &GameConfig) -> Result<Self> {
        Ok(Self::from_roster(Roster::from_config(config)?))
    }

    /// Session over an existing roster, with no combatants chosen.
    #[must_use]
    pub fn from_roster(roster: Roster) -> Self {
        Self {
            roster,
            attacker: None,
            defender: None,
        }
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn attacker(&self) -> Option<&CharacterId> {
        self.attacker.as_ref()
    }

    #[must_use]
    pub fn defender(&self) -> Option<&CharacterId> {
        self.defender.as_ref()
    }

    /// The combatant in `slot`, or `MissingCombatant` if none is chosen.
    pub fn combatant(&self, slot: CombatantSlot) -> Result<&CharacterId> {
        let id = match slot {
            CombatantSlot::Attacker => self.attacker.as_ref(),
            CombatantSlot::Defender => self.defender.as_ref(),
        };
        id.ok_or(GameError::MissingCombatant(slot))
    }

    /// The player's character.
    pub fn attacker_character(&self) -> Result<&Character> {
        self.roster.get(self.combatant(CombatantSlot::Attacker)?)
    }

    /// The current opponent.
    pub fn defender_character(&self) -> Result<&Character> {
        self.roster.get(self.combatant(CombatantSlot::Defender)?)
    }

    /// True when only the attacker is left.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.attacker
            .as_ref()
            .is_some_and(|id| self.roster.is_sole_survivor(id))
    }

    /// True when the attacker has been defeated.
    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.attacker_character()
            .map(Character::is_defeated)
            .unwrap_or(false)
    }

    pub(crate) fn select_attacker(&mut self, id: CharacterId) -> Result<()> {
        self.roster.get(&id)?;
        self.attacker = Some(id);
        Ok(())
    }

    pub(crate) fn select_defender(&mut self, id: CharacterId) -> Result<()> {
        self.roster.get(&id)?;
        self.defender = Some(id);
        Ok(())
    }

    /// Run one exchange between the chosen combatants.
    pub(crate) fn resolve_attack(&mut self) -> Result<BattleReport> {
        let attacker_id = self.combatant(CombatantSlot::Attacker)?.clone();
        let defender_id = self.combatant(CombatantSlot::Defender)?.clone();

        let mut attacker = self.roster.get(&attacker_id)?.clone();
        let mut defender = self.roster.get(&defender_id)?.clone();
        let report = BattleResolver::resolve_attack(&mut attacker, &mut defender);

        *self.roster.get_mut(&attacker_id)? = attacker;
        *self.roster.get_mut(&defender_id)? = defender;
        Ok(report)
    }

    /// Evaluate the current exchange.
    pub(crate) fn outcome(&self) -> Result<BattleOutcome> {
        BattleOutcome::evaluate(
            &self.roster,
            self.combatant(CombatantSlot::Attacker)?,
            self.combatant(CombatantSlot::Defender)?,
        )
    }

    /// Remove the defeated defender from the roster and clear the slot.
    pub(crate) fn remove_defender(&mut self) -> Result<Character> {
        let id = self
            .defender
            .take()
            .ok_or(GameError::MissingCombatant(CombatantSlot::Defender))?;
        self.roster.remove(&id).ok_or(GameError::NotFound(id))
    }
}
