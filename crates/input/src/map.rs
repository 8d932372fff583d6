//! Key mapping from terminal events to game input.

use crate::types::{InputEvent, Symbol};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Pad bound to a key, if any.
///
/// Each pad has a letter (its colour initial) and a digit (its position).
pub fn pad_key(code: KeyCode) -> Option<Symbol> {
    match code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('1') => Some(Symbol::Yellow),
        KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Char('2') => Some(Symbol::Blue),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('3') => Some(Symbol::Red),
        KeyCode::Char('g') | KeyCode::Char('G') | KeyCode::Char('4') => Some(Symbol::Green),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map one key press to an input event.
///
/// Every key that is neither a quit key nor a pad key is a plain "any key".
pub fn map_key(key: KeyEvent) -> InputEvent {
    if should_quit(key) {
        return InputEvent::Quit;
    }
    match pad_key(key.code) {
        Some(symbol) => InputEvent::PadKey(symbol),
        None => InputEvent::AnyKey,
    }
}
