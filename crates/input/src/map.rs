//! Key mapping from terminal events to game commands.

use crate::types::{BlocksAction, JumperAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a blocks command.
pub fn map_blocks_key(key: KeyEvent) -> Option<BlocksAction> {
    match key.code {
        KeyCode::Enter => Some(BlocksAction::Start),

        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(BlocksAction::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(BlocksAction::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(BlocksAction::SoftDrop)
        }

        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('x')
        | KeyCode::Char('X') => Some(BlocksAction::RotateCw),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(BlocksAction::RotateCcw),

        KeyCode::Char(' ') => Some(BlocksAction::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(BlocksAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(BlocksAction::Restart),

        _ => None,
    }
}

/// Map a key press to a discrete jumper command.
///
/// Left/right are held states and go through [`crate::HeldKeys`] instead.
pub fn map_jumper_key(key: KeyEvent) -> Option<JumperAction> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(JumperAction::Jump)
        }
        KeyCode::Enter => Some(JumperAction::Start),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn blocks_movement_keys() {
        assert_eq!(map_blocks_key(key(KeyCode::Left)), Some(BlocksAction::MoveLeft));
        assert_eq!(map_blocks_key(key(KeyCode::Right)), Some(BlocksAction::MoveRight));
        assert_eq!(map_blocks_key(key(KeyCode::Down)), Some(BlocksAction::SoftDrop));
        assert_eq!(map_blocks_key(key(KeyCode::Char('A'))), Some(BlocksAction::MoveLeft));
        assert_eq!(map_blocks_key(key(KeyCode::Char('l'))), Some(BlocksAction::MoveRight));
    }

    #[test]
    fn blocks_rotation_and_commands() {
        assert_eq!(map_blocks_key(key(KeyCode::Up)), Some(BlocksAction::RotateCw));
        assert_eq!(map_blocks_key(key(KeyCode::Char('z'))), Some(BlocksAction::RotateCcw));
        assert_eq!(map_blocks_key(key(KeyCode::Char(' '))), Some(BlocksAction::HardDrop));
        assert_eq!(map_blocks_key(key(KeyCode::Enter)), Some(BlocksAction::Start));
        assert_eq!(map_blocks_key(key(KeyCode::Char('p'))), Some(BlocksAction::Pause));
        assert_eq!(map_blocks_key(key(KeyCode::Char('r'))), Some(BlocksAction::Restart));
        assert_eq!(map_blocks_key(key(KeyCode::Char('m'))), None);
    }

    #[test]
    fn jumper_keys() {
        assert_eq!(map_jumper_key(key(KeyCode::Char(' '))), Some(JumperAction::Jump));
        assert_eq!(map_jumper_key(key(KeyCode::Up)), Some(JumperAction::Jump));
        assert_eq!(map_jumper_key(key(KeyCode::Enter)), Some(JumperAction::Start));
        assert_eq!(map_jumper_key(key(KeyCode::Left)), None);
    }

    #[test]
    fn quit_keys() {
        assert!(should_quit(key(KeyCode::Char('q'))));
        assert!(should_quit(key(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!should_quit(key(KeyCode::Char('c'))));
    }
}
