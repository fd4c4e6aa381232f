//! Input events raised by the presentation layer.

use serde::{Deserialize, Serialize};

use super::character::CharacterId;

/// An input from the player.
///
/// Events are delivered one at a time and each runs to completion before
/// the next is looked at.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// The "press start" trigger.
    Begin,
    /// A character was clicked in the roster.
    CharacterSelected(CharacterId),
    /// The attack button was pressed.
    Attack,
    /// The reset button was pressed.
    Reset,
}

impl Event {
    /// Shorthand for `Event::CharacterSelected`.
    pub fn select(id: impl Into<CharacterId>) -> Self {
        Event::CharacterSelected(id.into())
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::Begin => f.write_str("Begin"),
            Event::CharacterSelected(id) => write!(f, "CharacterSelected({})", id),
            Event::Attack => f.write_str("Attack"),
            Event::Reset => f.write_str("Reset"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_shorthand() {
        assert_eq!(
            Event::select("obiwan"),
            Event::CharacterSelected(CharacterId::new("obiwan"))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Event::Begin.to_string(), "Begin");
        assert_eq!(Event::select("darthMaul").to_string(), "CharacterSelected(darthMaul)");
    }
}
