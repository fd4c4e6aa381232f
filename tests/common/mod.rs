//! Shared helpers for integration tests.

#![allow(dead_code)]

use rust_duel::core::GameConfig;
use rust_duel::effects::{Presenter, RecordingPresenter};
use rust_duel::game::GameController;
use rust_duel::rules::{Event, GameState};

/// Install a test-friendly tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`; silent by default.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_test_writer()
        .try_init();
}

/// Controller over the reference roster with a recording presenter.
pub fn new_game() -> GameController<RecordingPresenter> {
    init_tracing();
    GameController::new(GameConfig::default(), RecordingPresenter::new()).unwrap()
}

/// Begin and pick `attacker` vs `defender`.
pub fn start_battle<P: Presenter>(game: &mut GameController<P>, attacker: &str, defender: &str) {
    game.dispatch(Event::Begin).unwrap();
    game.dispatch(Event::select(attacker)).unwrap();
    game.dispatch(Event::select(defender)).unwrap();
    assert_eq!(game.state(), GameState::Battle);
}

/// Attack until the battle ends. Returns the number of attacks made.
pub fn fight_to_end<P: Presenter>(game: &mut GameController<P>) -> usize {
    let mut attacks = 0;
    while game.state() == GameState::Battle {
        game.dispatch(Event::Attack).unwrap();
        attacks += 1;
        assert!(attacks < 1000, "battle did not terminate");
    }
    attacks
}
