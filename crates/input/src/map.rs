//! Key mapping from terminal events to game commands.

use crate::types::{Direction, GameCommand};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game commands.
///
/// Arrows, vim keys (`hjkl`) and `wasd` slide tiles; `r` restarts.
pub fn handle_key_event(key: KeyEvent) -> Option<GameCommand> {
    let dir = match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Direction::Left,
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Direction::Right,
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Direction::Up,
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Direction::Down,
        KeyCode::Char('r' | 'R') => return Some(GameCommand::Restart),
        _ => return None,
    };
    Some(GameCommand::Move(dir))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Option<GameCommand> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(key(KeyCode::Left), Some(GameCommand::Move(Direction::Left)));
        assert_eq!(key(KeyCode::Right), Some(GameCommand::Move(Direction::Right)));
        assert_eq!(key(KeyCode::Up), Some(GameCommand::Move(Direction::Up)));
        assert_eq!(key(KeyCode::Down), Some(GameCommand::Move(Direction::Down)));
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(key(KeyCode::Char('h')), Some(GameCommand::Move(Direction::Left)));
        assert_eq!(key(KeyCode::Char('L')), Some(GameCommand::Move(Direction::Right)));
        assert_eq!(key(KeyCode::Char('w')), Some(GameCommand::Move(Direction::Up)));
        assert_eq!(key(KeyCode::Char('S')), Some(GameCommand::Move(Direction::Down)));
        assert_eq!(key(KeyCode::Char('r')), Some(GameCommand::Restart));
        assert_eq!(key(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
