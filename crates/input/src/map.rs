//! Key mapping from terminal events to game commands.

use crate::types::{Command, Intent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a command.
///
/// Releases and auto-repeats are ignored, as is every key without a binding.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(key) {
        return Some(Command::Quit);
    }
    map_intent(key.code).map(Command::Play)
}

fn map_intent(code: KeyCode) -> Option<Intent> {
    match code {
        KeyCode::Down => Some(Intent::Down),
        KeyCode::Left => Some(Intent::Left),
        KeyCode::Right => Some(Intent::Right),
        KeyCode::Char(' ') | KeyCode::Up => Some(Intent::Rotate),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            Some(Command::Play(Intent::Left))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Right)),
            Some(Command::Play(Intent::Right))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Down)),
            Some(Command::Play(Intent::Down))
        );
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(Command::Play(Intent::Rotate))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Up)),
            Some(Command::Play(Intent::Rotate))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), Some(Command::Quit));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_unbound_and_non_press_keys_are_ignored() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), None);

        let mut release = KeyEvent::from(KeyCode::Left);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release), None);

        let mut repeat = KeyEvent::from(KeyCode::Down);
        repeat.kind = KeyEventKind::Repeat;
        assert_eq!(map_key(repeat), None);
    }
}
