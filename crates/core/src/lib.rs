//! Core scoring logic module - pure, deterministic, and testable
//!
//! This module contains the bowling rules and the scoring state machine.
//! It has **no dependencies** on terminals, input devices, or process I/O:
//!
//! - **Deterministic**: the same rolls always produce the same game
//! - **Testable**: every transition is reachable from plain pin counts
//! - **Allocation-light**: frames and pending bonuses are stored inline
//!
//! # Module Structure
//!
//! - [`roll`]: a single delivery and its classification
//! - [`frame`]: two-roll ordinary frames and the three-roll terminal frame
//! - [`ledger`]: strike/spare bonuses still owed to earlier frames
//! - [`score_keeper`]: the state machine that interprets each roll
//! - [`snapshot`]: serialisable read-only view for scoreboards
//! - [`moves`]: scripted and seeded-random move sources
//! - [`rng`]: small deterministic RNG for generated games
//!
//! # Scoring Rules
//!
//! - **Open frame**: pins knocked down in two rolls
//! - **Spare**: 10 plus the next roll
//! - **Strike**: 10 plus the next two rolls
//! - **Terminal frame**: a strike or spare earns a third (bonus) roll
//!
//! # Example
//!
//! ```
//! use tui_bowling_core::{ScoreKeeper, ScoreError};
//!
//! let mut game = ScoreKeeper::new();
//! game.roll(10).unwrap();
//! game.roll(3).unwrap();
//! game.roll(4).unwrap();
//!
//! assert_eq!(game.frames()[0].score(), 17);
//! assert_eq!(game.score(), 24);
//!
//! // Only the pins left standing can be knocked down.
//! game.roll(6).unwrap();
//! assert!(matches!(game.roll(5), Err(ScoreError::InvalidRoll { .. })));
//! ```

pub mod error;
pub mod frame;
pub mod ledger;
pub mod moves;
pub mod rng;
pub mod roll;
pub mod score_keeper;
pub mod snapshot;

pub use tui_bowling_types as types;

// Re-export commonly used types for convenience
pub use error::{MoveScriptError, ScoreError};
pub use frame::Frame;
pub use ledger::{BonusDebt, BonusLedger};
pub use moves::{play_out, play_out_with, MoveSource, RandomBowler, ScriptedMoves};
pub use rng::SimpleRng;
pub use roll::Roll;
pub use score_keeper::ScoreKeeper;
pub use snapshot::{FrameSnapshot, GameSnapshot};
