//! The presentation-layer capability set.
//!
//! A UI implements `Presenter` and receives effects through `apply`. The
//! core never renders anything itself.

use crate::core::{CharacterId, CombatantSlot, HealthEntry, Roster};

use super::Effect;

/// Capabilities the core needs from a UI.
///
/// Methods with default bodies are cosmetic; a minimal UI can ignore them.
pub trait Presenter {
    fn render_roster(&mut self, roster: &Roster);

    fn update_health_display(&mut self, entries: &[HealthEntry]);

    fn remove_character_view(&mut self, id: &CharacterId);

    fn place_combatant(&mut self, _id: &CharacterId, _slot: CombatantSlot) {}

    fn show_combatant_slots(&mut self) {}

    fn clear_board(&mut self) {}

    fn set_message(&mut self, text: &str);

    fn set_message_flashing(&mut self, _flashing: bool) {}

    fn show_battle_text(&mut self, text: &str);

    fn show_win(&mut self);

    fn show_loss(&mut self);

    /// Make `candidates` clickable. Clicks come back as
    /// `Event::CharacterSelected`.
    fn enable_selection(&mut self, candidates: &[CharacterId]);

    fn disable_selection(&mut self);

    fn enable_attack_input(&mut self);

    fn disable_attack_input(&mut self);

    fn show_reset_input(&mut self) {}

    /// Apply one effect.
    fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::RenderRoster(roster) => self.render_roster(roster),
            Effect::UpdateHealthDisplay(entries) => self.update_health_display(entries),
            Effect::RemoveCharacterView(id) => self.remove_character_view(id),
            Effect::PlaceCombatant { id, slot } => self.place_combatant(id, *slot),
            Effect::ShowCombatantSlots => self.show_combatant_slots(),
            Effect::ClearBoard => self.clear_board(),
            Effect::SetMessage(text) => self.set_message(text),
            Effect::SetMessageFlashing(flashing) => self.set_message_flashing(*flashing),
            Effect::ShowBattleText(text) => self.show_battle_text(text),
            Effect::ShowWin => self.show_win(),
            Effect::ShowLoss => self.show_loss(),
            Effect::EnableSelection(candidates) => self.enable_selection(candidates),
            Effect::DisableSelection => self.disable_selection(),
            Effect::EnableAttackInput => self.enable_attack_input(),
            Effect::DisableAttackInput => self.disable_attack_input(),
            Effect::ShowResetInput => self.show_reset_input(),
        }
    }

    /// Apply effects in order.
    fn apply_all<'a, I>(&mut self, effects: I)
    where
        I: IntoIterator<Item = &'a Effect>,
        Self: Sized,
    {
        for effect in effects {
            self.apply(effect);
        }
    }
}

/// Presenter that records every effect it receives.
///
/// Used by tests and by headless drivers that inspect output afterwards.
#[derive(Clone, Debug, Default)]
pub struct RecordingPresenter {
    effects: Vec<Effect>,
}

impl RecordingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything received so far, oldest first.
    #[must_use]
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Drain the recorded effects.
    pub fn take(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }

    #[must_use]
    pub fn contains(&self, effect: &Effect) -> bool {
        self.effects.contains(effect)
    }

    /// Most recent instruction line.
    #[must_use]
    pub fn last_message(&self) -> Option<&str> {
        self.effects.iter().rev().find_map(|e| match e {
            Effect::SetMessage(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Most recent battle text. Empty if it was cleared.
    #[must_use]
    pub fn last_battle_text(&self) -> Option<&str> {
        self.effects.iter().rev().find_map(|e| match e {
            Effect::ShowBattleText(text) => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Presenter for RecordingPresenter {
    fn apply(&mut self, effect: &Effect) {
        self.effects.push(effect.clone());
    }

    fn render_roster(&mut self, roster: &Roster) {
        self.apply(&Effect::RenderRoster(roster.clone()));
    }

    fn update_health_display(&mut self, entries: &[HealthEntry]) {
        self.apply(&Effect::UpdateHealthDisplay(entries.to_vec()));
    }

    fn remove_character_view(&mut self, id: &CharacterId) {
        self.apply(&Effect::RemoveCharacterView(id.clone()));
    }

    fn place_combatant(&mut self, id: &CharacterId, slot: CombatantSlot) {
        self.apply(&Effect::PlaceCombatant { id: id.clone(), slot });
    }

    fn show_combatant_slots(&mut self) {
        self.apply(&Effect::ShowCombatantSlots);
    }

    fn clear_board(&mut self) {
        self.apply(&Effect::ClearBoard);
    }

    fn set_message(&mut self, text: &str) {
        self.apply(&Effect::message(text));
    }

    fn set_message_flashing(&mut self, flashing: bool) {
        self.apply(&Effect::SetMessageFlashing(flashing));
    }

    fn show_battle_text(&mut self, text: &str) {
        self.apply(&Effect::battle_text(text));
    }

    fn show_win(&mut self) {
        self.apply(&Effect::ShowWin);
    }

    fn show_loss(&mut self) {
        self.apply(&Effect::ShowLoss);
    }

    fn enable_selection(&mut self, candidates: &[CharacterId]) {
        self.apply(&Effect::EnableSelection(candidates.to_vec()));
    }

    fn disable_selection(&mut self) {
        self.apply(&Effect::DisableSelection);
    }

    fn enable_attack_input(&mut self) {
        self.apply(&Effect::EnableAttackInput);
    }

    fn disable_attack_input(&mut self) {
        self.apply(&Effect::DisableAttackInput);
    }

    fn show_reset_input(&mut self) {
        self.apply(&Effect::ShowResetInput);
    }
}

/// Presenter that writes every effect to the `tracing` log.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingPresenter;

impl Presenter for TracingPresenter {
    fn render_roster(&mut self, roster: &Roster) {
        for c in roster.iter() {
            tracing::info!(id = %c.id(), name = c.name(), hp = c.displayed_health(), "roster");
        }
    }

    fn update_health_display(&mut self, entries: &[HealthEntry]) {
        for entry in entries {
            tracing::info!(id = %entry.id, hp = entry.health_points, "health");
        }
    }

    fn remove_character_view(&mut self, id: &CharacterId) {
        tracing::info!(%id, "removed");
    }

    fn set_message(&mut self, text: &str) {
        tracing::info!("{}", text);
    }

    fn show_battle_text(&mut self, text: &str) {
        if !text.is_empty() {
            tracing::info!("{}", text);
        }
    }

    fn show_win(&mut self) {
        tracing::info!("You Win!!!");
    }

    fn show_loss(&mut self) {
        tracing::info!("You Lose!!!");
    }

    fn enable_selection(&mut self, candidates: &[CharacterId]) {
        tracing::debug!(?candidates, "selection enabled");
    }

    fn disable_selection(&mut self) {
        tracing::debug!("selection disabled");
    }

    fn enable_attack_input(&mut self) {
        tracing::debug!("attack enabled");
    }

    fn disable_attack_input(&mut self) {
        tracing::debug!("attack disabled");
    }
}
