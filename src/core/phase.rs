//! Game-flow states.
//!
//! ```text
//! Start -> PlayerSelect -> OpponentSelect -> Battle -+-> OpponentSelect
//!                                                    +-> Won
//!                                                    +-> Lost
//! ```
//!
//! `Won` and `Lost` are terminal. Only a reset leaves them.

use serde::{Deserialize, Serialize};

use super::event::Event;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Every opponent was defeated.
    Win,
    /// The player's character was defeated.
    Loss,
}

/// The single active game-flow state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for the begin trigger.
    #[default]
    Start,
    /// Waiting for the player to pick their character.
    PlayerSelect,
    /// Waiting for the player to pick an opponent.
    OpponentSelect,
    /// Waiting for attacks.
    Battle,
    /// All opponents defeated.
    Won,
    /// The player's character was defeated.
    Lost,
}

impl GameState {
    /// True for `Won` and `Lost`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::Won | GameState::Lost)
    }

    /// The game result, if the game is over.
    #[must_use]
    pub fn result(self) -> Option<GameResult> {
        match self {
            GameState::Won => Some(GameResult::Win),
            GameState::Lost => Some(GameResult::Loss),
            _ => None,
        }
    }

    /// Whether this state has a handler for `event`.
    ///
    /// Reset is available once the game has begun.
    #[must_use]
    pub fn accepts(self, event: &Event) -> bool {
        match (self, event) {
            (GameState::Start, Event::Begin) => true,
            (GameState::PlayerSelect, Event::CharacterSelected(_)) => true,
            (GameState::OpponentSelect, Event::CharacterSelected(_)) => true,
            (GameState::Battle, Event::Attack) => true,
            (GameState::Start, Event::Reset) => false,
            (_, Event::Reset) => true,
            _ => false,
        }
    }

    /// Whether `next` may directly follow this state.
    #[must_use]
    pub fn can_transition_to(self, next: GameState) -> bool {
        use GameState::*;
        matches!(
            (self, next),
            (Start, PlayerSelect)
                | (PlayerSelect, OpponentSelect)
                | (OpponentSelect, Battle)
                | (Battle, Battle)
                | (Battle, OpponentSelect)
                | (Battle, Won)
                | (Battle, Lost)
        )
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameState::Start => "Start",
            GameState::PlayerSelect => "PlayerSelect",
            GameState::OpponentSelect => "OpponentSelect",
            GameState::Battle => "Battle",
            GameState::Won => "Won",
            GameState::Lost => "Lost",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(GameState::Won.is_terminal());
        assert!(GameState::Lost.is_terminal());
        assert!(!GameState::Battle.is_terminal());

        assert_eq!(GameState::Won.result(), Some(GameResult::Win));
        assert_eq!(GameState::Lost.result(), Some(GameResult::Loss));
        assert_eq!(GameState::OpponentSelect.result(), None);
    }

    #[test]
    fn test_accepts() {
        assert!(GameState::Start.accepts(&Event::Begin));
        assert!(!GameState::Start.accepts(&Event::Attack));
        assert!(!GameState::Start.accepts(&Event::Reset));

        assert!(GameState::PlayerSelect.accepts(&Event::select("obiwan")));
        assert!(!GameState::PlayerSelect.accepts(&Event::Attack));

        assert!(GameState::Battle.accepts(&Event::Attack));
        assert!(!GameState::Battle.accepts(&Event::select("obiwan")));

        assert!(!GameState::Won.accepts(&Event::Attack));
        assert!(GameState::Won.accepts(&Event::Reset));
        assert!(GameState::Lost.accepts(&Event::Reset));
    }

    #[test]
    fn test_no_skipped_states() {
        assert!(GameState::Start.can_transition_to(GameState::PlayerSelect));
        assert!(!GameState::Start.can_transition_to(GameState::Battle));
        assert!(!GameState::PlayerSelect.can_transition_to(GameState::Battle));
        assert!(GameState::Battle.can_transition_to(GameState::OpponentSelect));
        assert!(!GameState::Won.can_transition_to(GameState::OpponentSelect));
    }

    #[test]
    fn test_default_is_start() {
        assert_eq!(GameState::default(), GameState::Start);
        assert_eq!(GameState::default().to_string(), "Start");
    }
}
