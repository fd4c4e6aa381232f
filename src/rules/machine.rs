//! The game-flow transition function.
//!
//! `transition` takes the active state, one event, and the session by value,
//! and returns the next state, the updated session, and the effects for the
//! presentation layer. It performs no I/O; the controller applies the
//! effects.
//!
//! Every state has a set of entry effects (`entry_effects`) that run when it
//! becomes active: the instruction text and the inputs it listens to.

use tracing::info;

use crate::battle::BattleOutcome;
use crate::core::{CharacterId, CombatantSlot, Event, GameError, GameState, Result};
use crate::effects::{Effect, Effects};
use crate::game::Session;

pub const START_MESSAGE: &str = "Press <Space> to Begin";
pub const PLAYER_SELECT_MESSAGE: &str = "Choose Your Character";
pub const OPPONENT_SELECT_MESSAGE: &str = "Choose Your Opponent";
pub const BATTLE_MESSAGE: &str = "FIGHT!!!";

const HINT: &str = "Choose Darth Maul and defeat Obi-Wan, Luke, and Darth Sidious in this order";

/// Output of a successful transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub session: Session,
    pub effects: Effects,
}

impl Transition {
    fn new(state: GameState, session: Session, effects: Effects) -> Self {
        Self {
            state,
            session,
            effects,
        }
    }
}

/// Advance the machine by one event.
///
/// Returns `InvalidTransition` when the state has no handler for the event,
/// including `Reset`, which the controller handles itself. Returns
/// `NotFound` when a selected id is not in the roster.
pub fn transition(state: GameState, event: Event, session: Session) -> Result<Transition> {
    match (state, event) {
        (GameState::Start, Event::Begin) => begin(session),
        (GameState::PlayerSelect, Event::CharacterSelected(id)) => select_player(session, id),
        (GameState::OpponentSelect, Event::CharacterSelected(id)) => select_opponent(session, id),
        (GameState::Battle, Event::Attack) => attack(session),
        (state, event) => Err(GameError::InvalidTransition { state, event }),
    }
}

/// Effects shown when `state` becomes active.
#[must_use]
pub fn entry_effects(state: GameState, session: &Session) -> Effects {
    let mut effects = Effects::new();
    match state {
        GameState::Start => {
            effects.push(Effect::message(START_MESSAGE));
        }
        GameState::PlayerSelect => {
            effects.push(Effect::message(PLAYER_SELECT_MESSAGE));
            effects.push(Effect::SetMessageFlashing(false));
            effects.push(Effect::ShowCombatantSlots);
        }
        GameState::OpponentSelect => {
            effects.push(Effect::message(OPPONENT_SELECT_MESSAGE));
            effects.push(Effect::SetMessageFlashing(false));
        }
        GameState::Battle => {
            effects.push(Effect::message(BATTLE_MESSAGE));
            effects.push(Effect::SetMessageFlashing(true));
            effects.push(Effect::EnableAttackInput);
        }
        GameState::Won => effects.push(Effect::ShowWin),
        GameState::Lost => effects.push(Effect::ShowLoss),
    }
    if let Some(candidates) = selection_candidates(state, session) {
        effects.push(Effect::EnableSelection(candidates));
    }
    effects
}

/// Characters the player may click in `state`, if selection is live.
///
/// Everyone during player select; everyone but the attacker during
/// opponent select.
#[must_use]
pub fn selection_candidates(state: GameState, session: &Session) -> Option<Vec<CharacterId>> {
    match state {
        GameState::PlayerSelect => Some(session.roster().ids().cloned().collect()),
        GameState::OpponentSelect => Some(match session.attacker() {
            Some(attacker) => session.roster().candidates_excluding(attacker),
            None => session.roster().ids().cloned().collect(),
        }),
        _ => None,
    }
}

fn begin(session: Session) -> Result<Transition> {
    info!("Starting the Game");
    info!("**Hint** {}", HINT);

    let mut effects = Effects::new();
    effects.push(Effect::RenderRoster(session.roster().clone()));
    effects.push(Effect::ShowResetInput);
    effects.extend(entry_effects(GameState::PlayerSelect, &session));
    Ok(Transition::new(GameState::PlayerSelect, session, effects))
}

fn select_player(mut session: Session, id: CharacterId) -> Result<Transition> {
    session.select_attacker(id.clone())?;
    info!(character = %id, "Character chosen: {}", session.attacker_character()?.name());
    info!("Transition from player select to opponent select");

    let mut effects = Effects::new();
    effects.push(Effect::PlaceCombatant {
        id,
        slot: CombatantSlot::Attacker,
    });
    effects.push(Effect::DisableSelection);
    effects.extend(entry_effects(GameState::OpponentSelect, &session));
    Ok(Transition::new(GameState::OpponentSelect, session, effects))
}

fn select_opponent(mut session: Session, id: CharacterId) -> Result<Transition> {
    session.roster().get(&id)?;
    if session.attacker() == Some(&id) {
        return Err(GameError::InvalidTransition {
            state: GameState::OpponentSelect,
            event: Event::CharacterSelected(id),
        });
    }

    session.select_defender(id.clone())?;
    info!(character = %id, "Opponent chosen: {}", session.defender_character()?.name());
    info!("Transition from opponent select to battle");

    let mut effects = Effects::new();
    effects.push(Effect::PlaceCombatant {
        id,
        slot: CombatantSlot::Defender,
    });
    effects.push(Effect::DisableSelection);
    effects.extend(entry_effects(GameState::Battle, &session));
    Ok(Transition::new(GameState::Battle, session, effects))
}

fn attack(mut session: Session) -> Result<Transition> {
    let report = session.resolve_attack()?;

    let mut effects = Effects::new();
    effects.push(Effect::battle_text(report.summary()));
    effects.push(Effect::UpdateHealthDisplay(session.roster().health_snapshot()));

    let next = match session.outcome()? {
        BattleOutcome::Continue => GameState::Battle,
        BattleOutcome::Lost => {
            effects.push(Effect::DisableAttackInput);
            info!("*** Game Over ***");
            GameState::Lost
        }
        outcome @ (BattleOutcome::DefenderDefeated | BattleOutcome::Won) => {
            let defeated = session.remove_defender()?;
            effects.push(Effect::RemoveCharacterView(defeated.id().clone()));
            effects.push(Effect::clear_battle_text());
            effects.push(Effect::DisableAttackInput);
            if outcome == BattleOutcome::Won {
                info!("*** Game Over ***");
                GameState::Won
            } else {
                info!("Transition from battle to opponent select");
                GameState::OpponentSelect
            }
        }
    };

    if next != GameState::Battle {
        effects.extend(entry_effects(next, &session));
    }
    Ok(Transition::new(next, session, effects))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Character, GameConfig, Roster};

    fn fresh() -> Session {
        Session::new(&GameConfig::default()).unwrap()
    }

    fn step(state: GameState, event: Event, session: Session) -> Transition {
        transition(state, event, session).unwrap()
    }

    fn in_battle(attacker: &str, defender: &str) -> Session {
        let t = step(GameState::Start, Event::Begin, fresh());
        let t = step(t.state, Event::select(attacker), t.session);
        let t = step(t.state, Event::select(defender), t.session);
        assert_eq!(t.state, GameState::Battle);
        t.session
    }

    #[test]
    fn test_begin() {
        let t = step(GameState::Start, Event::Begin, fresh());
        assert_eq!(t.state, GameState::PlayerSelect);
        assert!(matches!(t.effects[0], Effect::RenderRoster(_)));
        assert!(t.effects.contains(&Effect::ShowResetInput));
        assert!(t.effects.contains(&Effect::message(PLAYER_SELECT_MESSAGE)));

        let all: Vec<CharacterId> = t.session.roster().ids().cloned().collect();
        assert_eq!(t.effects.last(), Some(&Effect::EnableSelection(all)));
    }

    #[test]
    fn test_select_player_keeps_character_in_roster() {
        let t = step(GameState::Start, Event::Begin, fresh());
        let t = step(t.state, Event::select("darthMaul"), t.session);

        assert_eq!(t.state, GameState::OpponentSelect);
        assert_eq!(t.session.attacker(), Some(&CharacterId::new("darthMaul")));
        assert_eq!(t.session.roster().len(), 4);

        match t.effects.last() {
            Some(Effect::EnableSelection(candidates)) => {
                assert_eq!(candidates.len(), 3);
                assert!(!candidates.contains(&CharacterId::new("darthMaul")));
            }
            other => panic!("Expected EnableSelection, got {:?}", other),
        }
    }

    #[test]
    fn test_select_unknown_player() {
        let t = step(GameState::Start, Event::Begin, fresh());
        let result = transition(t.state, Event::select("yoda"), t.session);
        assert_eq!(result, Err(GameError::NotFound(CharacterId::new("yoda"))));
    }

    #[test]
    fn test_attacker_cannot_be_opponent() {
        let t = step(GameState::Start, Event::Begin, fresh());
        let t = step(t.state, Event::select("darthMaul"), t.session);
        let result = transition(t.state, Event::select("darthMaul"), t.session);
        assert!(result.unwrap_err().is_invalid_transition());
    }

    #[test]
    fn test_select_opponent_enters_battle() {
        let t = step(GameState::Start, Event::Begin, fresh());
        let t = step(t.state, Event::select("darthMaul"), t.session);
        let t = step(t.state, Event::select("obiwan"), t.session);

        assert_eq!(t.state, GameState::Battle);
        assert_eq!(t.session.defender(), Some(&CharacterId::new("obiwan")));
        assert_eq!(
            t.effects.as_slice(),
            &[
                Effect::PlaceCombatant {
                    id: CharacterId::new("obiwan"),
                    slot: CombatantSlot::Defender,
                },
                Effect::DisableSelection,
                Effect::message(BATTLE_MESSAGE),
                Effect::SetMessageFlashing(true),
                Effect::EnableAttackInput,
            ]
        );
    }

    #[test]
    fn test_attack_continue() {
        let session = in_battle("darthMaul", "obiwan");
        let t = step(GameState::Battle, Event::Attack, session);

        assert_eq!(t.state, GameState::Battle);
        assert_eq!(
            t.effects[0],
            Effect::battle_text(
                "You attack Obi-Wan Kenobi for 6 damage.  Obi-Wan Kenobi counters for 12 damage."
            )
        );
        assert!(!t.effects.contains(&Effect::DisableAttackInput));
    }

    #[test]
    fn test_attack_defeats_defender() {
        let mut session = in_battle("darthMaul", "obiwan");
        let mut state = GameState::Battle;
        let mut attacks = 0;
        while state == GameState::Battle {
            let t = step(state, Event::Attack, session);
            state = t.state;
            session = t.session;
            attacks += 1;
        }

        assert_eq!(attacks, 6);
        assert_eq!(state, GameState::OpponentSelect);
        assert!(session.defender().is_none());
        assert!(!session.roster().contains(&CharacterId::new("obiwan")));
        assert_eq!(session.roster().len(), 3);
        assert_eq!(session.attacker_character().unwrap().health_points(), 108);
        assert_eq!(session.attacker_character().unwrap().attack_power(), 42);
    }

    #[test]
    fn test_attack_loss_takes_precedence() {
        let roster = Roster::from_characters(vec![
            Character::new("a", "A", 10, 10, 0),
            Character::new("d", "D", 10, 1, 10),
            Character::new("e", "E", 10, 1, 1),
        ])
        .unwrap();
        let t = step(GameState::Start, Event::Begin, Session::from_roster(roster));
        let t = step(t.state, Event::select("a"), t.session);
        let t = step(t.state, Event::select("d"), t.session);
        let t = step(t.state, Event::Attack, t.session);

        assert_eq!(t.state, GameState::Lost);
        assert_eq!(t.session.roster().len(), 3);
        assert!(t.effects.contains(&Effect::DisableAttackInput));
        assert_eq!(t.effects.last(), Some(&Effect::ShowLoss));
    }

    #[test]
    fn test_attack_wins_on_last_opponent() {
        let roster = Roster::from_characters(vec![
            Character::new("a", "A", 100, 50, 0),
            Character::new("d", "D", 10, 1, 1),
        ])
        .unwrap();
        let t = step(GameState::Start, Event::Begin, Session::from_roster(roster));
        let t = step(t.state, Event::select("a"), t.session);
        let t = step(t.state, Event::select("d"), t.session);
        let t = step(t.state, Event::Attack, t.session);

        assert_eq!(t.state, GameState::Won);
        assert!(t.session.is_won());
        assert!(t.effects.contains(&Effect::RemoveCharacterView(CharacterId::new("d"))));
        assert_eq!(t.effects.last(), Some(&Effect::ShowWin));
    }

    #[test]
    fn test_invalid_events_rejected() {
        let cases = [
            (GameState::Start, Event::Attack),
            (GameState::Start, Event::select("obiwan")),
            (GameState::PlayerSelect, Event::Begin),
            (GameState::PlayerSelect, Event::Attack),
            (GameState::OpponentSelect, Event::Attack),
            (GameState::Battle, Event::select("obiwan")),
            (GameState::Won, Event::Attack),
            (GameState::Lost, Event::Attack),
            (GameState::Battle, Event::Reset),
        ];
        for (state, event) in cases {
            let err = transition(state, event.clone(), fresh()).unwrap_err();
            assert_eq!(err, GameError::InvalidTransition { state, event });
        }
    }

    #[test]
    fn test_entry_effects_terminal() {
        assert_eq!(
            entry_effects(GameState::Won, &fresh()).as_slice(),
            &[Effect::ShowWin]
        );
        assert_eq!(
            entry_effects(GameState::Start, &fresh()).as_slice(),
            &[Effect::message(START_MESSAGE)]
        );
        assert!(selection_candidates(GameState::Battle, &fresh()).is_none());
    }
}
