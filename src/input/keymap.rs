use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::board::Direction;
use crate::session::GameCommand;

/// What a key press asks the front-end to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Command(GameCommand),
    /// Close the game-over dialog without restarting.
    Dismiss,
    Quit,
}

/// Key pattern: a code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        let code_matches = match (self.code, key.code) {
            (KeyCode::Char(want), KeyCode::Char(got)) => want.eq_ignore_ascii_case(&got),
            (want, got) => want == got,
        };
        // Shift is ignored so that `W` and `w` behave the same.
        let held = key.modifiers - KeyModifiers::SHIFT;
        code_matches && held == self.modifiers
    }
}

/// Explicit table from key patterns to actions, checked in order.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: Vec<(KeyBinding, InputAction)>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let up = InputAction::Command(GameCommand::Move(Direction::Up));
        let down = InputAction::Command(GameCommand::Move(Direction::Down));
        let left = InputAction::Command(GameCommand::Move(Direction::Left));
        let right = InputAction::Command(GameCommand::Move(Direction::Right));
        let restart = InputAction::Command(GameCommand::Restart);

        Self {
            bindings: vec![
                (KeyBinding::plain(KeyCode::Up), up),
                (KeyBinding::plain(KeyCode::Down), down),
                (KeyBinding::plain(KeyCode::Left), left),
                (KeyBinding::plain(KeyCode::Right), right),
                (KeyBinding::plain(KeyCode::Char('w')), up),
                (KeyBinding::plain(KeyCode::Char('s')), down),
                (KeyBinding::plain(KeyCode::Char('a')), left),
                (KeyBinding::plain(KeyCode::Char('d')), right),
                (KeyBinding::plain(KeyCode::Char('k')), up),
                (KeyBinding::plain(KeyCode::Char('j')), down),
                (KeyBinding::plain(KeyCode::Char('h')), left),
                (KeyBinding::plain(KeyCode::Char('l')), right),
                (KeyBinding::plain(KeyCode::Char('r')), restart),
                (KeyBinding::plain(KeyCode::Esc), InputAction::Dismiss),
                (KeyBinding::plain(KeyCode::Char('q')), InputAction::Quit),
                (KeyBinding::ctrl(KeyCode::Char('c')), InputAction::Quit),
            ],
        }
    }
}

impl KeyMap {
    pub fn new(bindings: Vec<(KeyBinding, InputAction)>) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &[(KeyBinding, InputAction)] {
        &self.bindings
    }

    /// Resolve a key event. Releases and repeats are ignored.
    pub fn resolve(&self, key: &KeyEvent) -> Option<InputAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        self.bindings
            .iter()
            .find(|(binding, _)| binding.matches(key))
            .map(|(_, action)| *action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn arrows_map_to_moves() {
        let map = KeyMap::default();
        assert_eq!(
            map.resolve(&key(KeyCode::Left, KeyModifiers::NONE)),
            Some(InputAction::Command(GameCommand::Move(Direction::Left)))
        );
        assert_eq!(
            map.resolve(&key(KeyCode::Down, KeyModifiers::NONE)),
            Some(InputAction::Command(GameCommand::Move(Direction::Down)))
        );
    }

    #[test]
    fn shifted_letter_matches_plain_binding() {
        let map = KeyMap::default();
        assert_eq!(
            map.resolve(&key(KeyCode::Char('W'), KeyModifiers::SHIFT)),
            Some(InputAction::Command(GameCommand::Move(Direction::Up)))
        );
    }

    #[test]
    fn ctrl_c_quits_but_plain_c_is_unbound() {
        let map = KeyMap::default();
        assert_eq!(
            map.resolve(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputAction::Quit)
        );
        assert_eq!(map.resolve(&key(KeyCode::Char('c'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn release_events_are_ignored() {
        let map = KeyMap::default();
        let mut event = key(KeyCode::Up, KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(map.resolve(&event), None);
    }
}
