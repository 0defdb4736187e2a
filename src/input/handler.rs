//! Key mapping from terminal events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    // Ctrl-R redoes; other Ctrl chords are reserved (Ctrl-C quits).
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Redo),
            _ => None,
        };
    }

    match key.code {
        // Cursor movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(GameAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(GameAction::CursorRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(GameAction::CursorUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(GameAction::CursorDown),

        // Selection
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameAction::Select),

        // History
        KeyCode::Char('u') | KeyCode::Char('U') => Some(GameAction::Undo),
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(GameAction::Redo),

        // Session
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::Shuffle),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(GameAction::GrowGrid),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(GameAction::ShrinkGrid),
        KeyCode::Char('v') | KeyCode::Char('V') => Some(GameAction::CycleVariant),

        // Presentation only
        KeyCode::Char('t') | KeyCode::Char('T') => Some(GameAction::CycleTheme),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
