//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::BowlAction`]s and
//! restart-prompt answers. Nothing here touches game state; the front end
//! decides what an action means for the current game.

pub mod map;

pub use tui_bowling_types as types;

pub use map::{handle_key_event, prompt_answer, should_quit, PromptAnswer};
