//! Error types surfaced by the scoring core.

use thiserror::Error;

/// Caller-input problems rejected by the scoring core.
///
/// A rejected call never leaves partial state behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("invalid roll of {pins}: {standing} pins standing")]
    InvalidRoll { pins: i32, standing: u8 },

    #[error("roll index {index} out of range: this frame has {len} rolls")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("the game is over (final score {score})")]
    GameOver { score: u32 },

    #[error("a game needs at least one frame")]
    NoFrames,

    #[error("{rounds} frames requested, at most {max} allowed")]
    TooManyRounds { rounds: usize, max: usize },
}

/// Failures while reading a scripted move list.
#[derive(Debug, Error)]
pub enum MoveScriptError {
    #[error("malformed move script: {0}")]
    Json(#[from] serde_json::Error),

    #[error("move script contains no rolls")]
    Empty,
}
