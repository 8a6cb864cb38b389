//! Key mapping from terminal events to board commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to board commands.
///
/// Arrows, WASD and HJKL all work. Keys without a meaning return `None` and
/// are dropped by the listener.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if should_quit(key) {
        return Some(Command::Terminate);
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(Command::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(Command::Right)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(Command::Down)
        }
        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(Command::Rotate),

        _ => None,
    }
}

/// Check if key should end the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
