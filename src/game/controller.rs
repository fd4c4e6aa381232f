//! Top-level controller: owns the live session and talks to the UI.
//!
//! The controller is the only place where state changes are committed. It
//! clones the session (O(1)), runs the pure transition, and on success
//! swaps in the new state, rebinds inputs, and hands the effects to its
//! presenter. A failed transition leaves everything untouched.
//!
//! ## Usage
//!
//! ```
//! use rust_duel::core::GameConfig;
//! use rust_duel::effects::RecordingPresenter;
//! use rust_duel::game::GameController;
//! use rust_duel::rules::{Event, GameState};
//!
//! let mut game = GameController::new(GameConfig::default(), RecordingPresenter::new()).unwrap();
//! game.dispatch(Event::Begin).unwrap();
//! game.dispatch(Event::select("darthMaul")).unwrap();
//! game.dispatch(Event::select("obiwan")).unwrap();
//! game.dispatch(Event::Attack).unwrap();
//!
//! assert_eq!(game.state(), GameState::Battle);
//! assert_eq!(game.session().defender_character().unwrap().health_points(), 114);
//! ```

use tracing::{info, warn};

use crate::core::{GameConfig, GameError, Result, Roster};
use crate::effects::{Effect, Presenter};
use crate::rules::{machine, Event, GameResult, GameState};

use super::{InputBindings, Session};

/// What `dispatch` did with an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The event was handled; the machine is now in this state.
    Applied(GameState),
    /// The event had no handler in the active state and was dropped.
    Ignored,
}

/// Owns the session, the active state, and the input bindings.
pub struct GameController<P: Presenter> {
    config: GameConfig,
    state: GameState,
    session: Session,
    bindings: InputBindings,
    presenter: P,
}

impl<P: Presenter> GameController<P> {
    /// Create a controller in the `Start` state.
    ///
    /// Fails if the configuration is not a playable roster.
    pub fn new(config: GameConfig, presenter: P) -> Result<Self> {
        let session = Session::new(&config)?;
        let mut controller = Self {
            config,
            state: GameState::Start,
            session,
            bindings: InputBindings::new(),
            presenter,
        };
        controller.enter_start();
        Ok(controller)
    }

    fn enter_start(&mut self) {
        self.state = GameState::Start;
        self.bindings.bind(self.state, &self.session);
        let effects = machine::entry_effects(self.state, &self.session);
        self.presenter.apply_all(&effects);
    }

    /// Deliver one input event.
    ///
    /// Events the active state does not accept are ignored. `NotFound` and
    /// other contract violations are returned and leave the game unchanged.
    pub fn dispatch(&mut self, event: Event) -> Result<DispatchOutcome> {
        if !self.bindings.accepts(&event) {
            warn!(state = %self.state, %event, "ignoring unbound input");
            return Ok(DispatchOutcome::Ignored);
        }
        if event == Event::Reset {
            self.reset()?;
            return Ok(DispatchOutcome::Applied(self.state));
        }

        match machine::transition(self.state, event, self.session.clone()) {
            Ok(transition) => {
                let previous = self.state;
                self.state = transition.state;
                self.session = transition.session;
                if previous != self.state {
                    info!(from = %previous, to = %self.state, "state changed");
                }

                self.bindings.bind(self.state, &self.session);
                self.presenter.apply_all(&transition.effects);
                Ok(DispatchOutcome::Applied(self.state))
            }
            Err(err @ GameError::InvalidTransition { .. }) => {
                warn!(%err, "ignoring event");
                Ok(DispatchOutcome::Ignored)
            }
            Err(err) => Err(err),
        }
    }

    /// Throw away the session and start over with a freshly seeded roster.
    ///
    /// All bindings are released before the new `Start` bindings go in.
    pub fn reset(&mut self) -> Result<()> {
        info!("*** Resetting Game ***");
        let session = Session::new(&self.config)?;

        self.bindings.release();
        self.presenter.apply(&Effect::ClearBoard);
        self.session = session;
        self.enter_start();
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        self.session.roster()
    }

    #[must_use]
    pub fn bindings(&self) -> &InputBindings {
        &self.bindings
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The game result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.state.result()
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Consume the controller and return its presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CharacterId;
    use crate::effects::RecordingPresenter;
    use crate::rules::machine::{BATTLE_MESSAGE, START_MESSAGE};

    fn controller() -> GameController<RecordingPresenter> {
        GameController::new(GameConfig::default(), RecordingPresenter::new()).unwrap()
    }

    #[test]
    fn test_new_enters_start() {
        let game = controller();
        assert_eq!(game.state(), GameState::Start);
        assert_eq!(game.presenter().last_message(), Some(START_MESSAGE));
        assert_eq!(game.bindings().generation(), 1);
    }

    #[test]
    fn test_invalid_config() {
        let result = GameController::new(GameConfig::new(), RecordingPresenter::new());
        assert!(matches!(result, Err(GameError::RosterTooSmall { .. })));
    }

    #[test]
    fn test_unbound_event_ignored() {
        let mut game = controller();
        game.presenter_mut().clear();

        assert_eq!(game.dispatch(Event::Attack), Ok(DispatchOutcome::Ignored));
        assert_eq!(game.dispatch(Event::Reset), Ok(DispatchOutcome::Ignored));
        assert_eq!(game.state(), GameState::Start);
        assert!(game.presenter().effects().is_empty());
    }

    #[test]
    fn test_not_found_leaves_state_untouched() {
        let mut game = controller();
        game.dispatch(Event::Begin).unwrap();
        let before = game.session().clone();
        let generation = game.bindings().generation();

        let result = game.dispatch(Event::select("yoda"));
        assert_eq!(result, Err(GameError::NotFound(CharacterId::new("yoda"))));
        assert_eq!(game.state(), GameState::PlayerSelect);
        assert_eq!(game.session(), &before);
        assert_eq!(game.bindings().generation(), generation);
    }

    #[test]
    fn test_selecting_attacker_as_opponent_ignored() {
        let mut game = controller();
        game.dispatch(Event::Begin).unwrap();
        game.dispatch(Event::select("darthMaul")).unwrap();

        assert_eq!(
            game.dispatch(Event::select("darthMaul")),
            Ok(DispatchOutcome::Ignored)
        );
        assert_eq!(game.state(), GameState::OpponentSelect);
        assert!(game.session().defender().is_none());
    }

    #[test]
    fn test_reaches_battle() {
        let mut game = controller();
        game.dispatch(Event::Begin).unwrap();
        game.dispatch(Event::select("darthMaul")).unwrap();
        let outcome = game.dispatch(Event::select("obiwan")).unwrap();

        assert_eq!(outcome, DispatchOutcome::Applied(GameState::Battle));
        assert!(game.bindings().attack_enabled());
        assert_eq!(game.presenter().last_message(), Some(BATTLE_MESSAGE));
    }

    #[test]
    fn test_reset_mid_battle() {
        let mut game = controller();
        game.dispatch(Event::Begin).unwrap();
        game.dispatch(Event::select("darthMaul")).unwrap();
        game.dispatch(Event::select("obiwan")).unwrap();
        game.dispatch(Event::Attack).unwrap();

        let outcome = game.dispatch(Event::Reset).unwrap();
        assert_eq!(outcome, DispatchOutcome::Applied(GameState::Start));
        assert_eq!(game.session(), &Session::new(&GameConfig::default()).unwrap());
        assert!(game.presenter().contains(&Effect::ClearBoard));
        assert_eq!(game.bindings().bound_count(), 1);
        assert!(game.bindings().accepts(&Event::Begin));
    }
}
