//! The single live set of input handlers.
//!
//! Every state change releases the previous bindings and installs the ones
//! for the new state, so at most one handler per input exists at a time.
//! The generation counter advances on every rebind; a UI can stamp the
//! handlers it installs with it and drop clicks from older generations.

use serde::{Deserialize, Serialize};

use crate::core::CharacterId;
use crate::rules::{machine, Event, GameState};

use super::Session;

/// Which inputs are currently accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputBindings {
    generation: u64,
    begin: bool,
    selection: Option<Vec<CharacterId>>,
    attack: bool,
    reset: bool,
}

impl InputBindings {
    /// No inputs bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Release every binding. The generation is kept.
    pub fn release(&mut self) {
        self.begin = false;
        self.selection = None;
        self.attack = false;
        self.reset = false;
    }

    /// Replace all bindings with those of `state`.
    pub fn bind(&mut self, state: GameState, session: &Session) {
        self.release();
        self.generation += 1;

        self.begin = state.accepts(&Event::Begin);
        self.selection = machine::selection_candidates(state, session);
        self.attack = state.accepts(&Event::Attack);
        self.reset = state.accepts(&Event::Reset);

        tracing::trace!(
            generation = self.generation,
            %state,
            begin = self.begin,
            attack = self.attack,
            reset = self.reset,
            "input bindings replaced"
        );
    }

    /// Whether an event of this kind is bound.
    ///
    /// Selected ids are checked by the state machine, not here, so an id
    /// missing from the roster still surfaces as `NotFound`.
    #[must_use]
    pub fn accepts(&self, event: &Event) -> bool {
        match event {
            Event::Begin => self.begin,
            Event::CharacterSelected(_) => self.selection.is_some(),
            Event::Attack => self.attack,
            Event::Reset => self.reset,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn selection(&self) -> Option<&[CharacterId]> {
        self.selection.as_deref()
    }

    #[must_use]
    pub fn attack_enabled(&self) -> bool {
        self.attack
    }

    #[must_use]
    pub fn reset_enabled(&self) -> bool {
        self.reset
    }

    /// Number of inputs currently bound.
    #[must_use]
    pub fn bound_count(&self) -> usize {
        [self.begin, self.selection.is_some(), self.attack, self.reset]
            .into_iter()
            .filter(|bound| *bound)
            .count()
    }
}
