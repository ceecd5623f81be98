//! Key mapping from terminal events to bowling actions.

use crate::types::BowlAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Answer to the "play again?" prompt shown after the last roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAnswer {
    Restart,
    Quit,
}

/// Map keyboard input to bowling actions.
pub fn handle_key_event(key: KeyEvent) -> Option<BowlAction> {
    match key.code {
        // Pin counts
        KeyCode::Char(c @ '0'..='9') => c.to_digit(10).map(|d| BowlAction::Knock(d as u8)),
        KeyCode::Char('-') => Some(BowlAction::Knock(0)),

        // Rack clears
        KeyCode::Char('x') | KeyCode::Char('X') => Some(BowlAction::Strike),
        KeyCode::Char('/') => Some(BowlAction::Spare),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(BowlAction::Restart),

        _ => None,
    }
}

/// Map keyboard input to a restart-prompt answer.
pub fn prompt_answer(key: KeyEvent) -> Option<PromptAnswer> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(PromptAnswer::Restart),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(PromptAnswer::Quit),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
