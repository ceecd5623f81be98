//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (scoring core, terminal rendering, input mapping).
//!
//! # Game Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PIN_COUNT` | 10 | Pins racked at the start of every frame |
//! | `DEFAULT_ROUNDS` | 10 | Frames in a standard game |
//! | `FRAME_ROLLS` | 2 | Roll slots in an ordinary frame |
//! | `LAST_FRAME_ROLLS` | 3 | Roll slots in the terminal frame |
//!
//! # Roll Stages
//!
//! Every [`GameState`] maps onto the roll slot the next delivery fills:
//!
//! | GameState | Stage |
//! |-----------|-------|
//! | `FirstRoll`, `SpareARollAgo`, `StrikeARollAgo`, `ConsecutiveStrikes` | First |
//! | `SecondRoll`, `StrikeTwoRollsAgo` | Second |
//! | `Bonus` | Third |
//! | `GameEnd` | Game over |
//!
//! # Examples
//!
//! ```
//! use tui_bowling_types::{pin_symbol, GameState, RollStage, RollState};
//!
//! assert_eq!(GameState::StrikeTwoRollsAgo.roll_stage(), RollStage::Second);
//! assert_eq!(GameState::ConsecutiveStrikes.pending_credits(), 2);
//!
//! assert_eq!(pin_symbol(0), "-");
//! assert_eq!(pin_symbol(7), "7");
//! assert_eq!(RollState::Spare.symbol(), Some("/"));
//! ```

/// Pins racked at the start of each frame.
pub const PIN_COUNT: u8 = 10;

/// Frames in a standard game.
pub const DEFAULT_ROUNDS: usize = 10;

/// Most frames a game may have; keeps every scoreboard row addressable.
pub const MAX_ROUNDS: usize = 1_000;

/// Roll slots in an ordinary frame.
pub const FRAME_ROLLS: usize = 2;

/// Roll slots in the terminal frame (two rolls plus the bonus roll).
pub const LAST_FRAME_ROLLS: usize = 3;

/// Rolls a strike still waits for before its frame is fully scored.
pub const STRIKE_BONUS_ROLLS: u8 = 2;

/// Rolls a spare still waits for before its frame is fully scored.
pub const SPARE_BONUS_ROLLS: u8 = 1;

/// Glyphs for open rolls, indexed by pins knocked down.
pub const PIN_SYMBOLS: [&str; PIN_COUNT as usize + 1] =
    ["-", "1", "2", "3", "4", "5", "6", "7", "8", "9", "X"];

/// Glyph for an open roll of `pins`.
///
/// Counts past [`PIN_COUNT`] never reach a roll slot; they render as empty.
pub fn pin_symbol(pins: u8) -> &'static str {
    PIN_SYMBOLS.get(pins as usize).copied().unwrap_or("")
}

/// Classification of a single roll slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RollState {
    /// Not rolled yet.
    #[default]
    Empty,
    /// Pins knocked down without clearing the rack.
    Open,
    /// Cleared the rack on the frame's second roll.
    Spare,
    /// Cleared the rack with a single roll.
    Strike,
    /// Second slot made moot by a first-roll strike.
    Striked,
    /// Reserved: foul line crossed.
    Foul,
    /// Reserved: split left standing.
    Split,
}

impl RollState {
    /// Glyph for this classification, or `None` when the glyph comes from the
    /// pin count instead (open rolls).
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            RollState::Open => None,
            RollState::Empty | RollState::Striked => Some(""),
            RollState::Spare => Some("/"),
            RollState::Strike => Some("X"),
            RollState::Foul => Some("F"),
            RollState::Split => Some("S"),
        }
    }
}

/// Frame-level classification.
///
/// `Last` is pinned on the terminal frame when it is built and never derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FrameState {
    #[default]
    Empty,
    Open,
    Spare,
    Strike,
    Last,
}

impl FrameState {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameState::Empty => "EMPTY",
            FrameState::Open => "OPEN",
            FrameState::Spare => "SPARE",
            FrameState::Strike => "STRIKE",
            FrameState::Last => "LAST",
        }
    }
}

/// Roll slot the next delivery fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollStage {
    First,
    Second,
    Third,
    GameOver,
}

impl RollStage {
    /// 1-based slot number, `None` once the game is over.
    pub fn number(&self) -> Option<u8> {
        match self {
            RollStage::First => Some(1),
            RollStage::Second => Some(2),
            RollStage::Third => Some(3),
            RollStage::GameOver => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RollStage::First => "First Roll",
            RollStage::Second => "Second Roll",
            RollStage::Third => "Third Roll",
            RollStage::GameOver => "Game Over",
        }
    }
}

/// States of the scoring state machine.
///
/// The `*Ago` variants and `ConsecutiveStrikes` record that the next roll also
/// pays a bonus owed to one or two earlier frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    FirstRoll,
    SecondRoll,
    SpareARollAgo,
    StrikeARollAgo,
    ConsecutiveStrikes,
    StrikeTwoRollsAgo,
    Bonus,
    GameEnd,
}

impl GameState {
    /// Roll slot the next delivery fills in this state.
    pub fn roll_stage(&self) -> RollStage {
        match self {
            GameState::FirstRoll
            | GameState::SpareARollAgo
            | GameState::StrikeARollAgo
            | GameState::ConsecutiveStrikes => RollStage::First,
            GameState::SecondRoll | GameState::StrikeTwoRollsAgo => RollStage::Second,
            GameState::Bonus => RollStage::Third,
            GameState::GameEnd => RollStage::GameOver,
        }
    }

    /// Number of earlier frames the next roll is credited to.
    pub fn pending_credits(&self) -> usize {
        match self {
            GameState::FirstRoll
            | GameState::SecondRoll
            | GameState::Bonus
            | GameState::GameEnd => 0,
            GameState::SpareARollAgo
            | GameState::StrikeARollAgo
            | GameState::StrikeTwoRollsAgo => 1,
            GameState::ConsecutiveStrikes => 2,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, GameState::GameEnd)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::FirstRoll => "FIRST_ROLL",
            GameState::SecondRoll => "SECOND_ROLL",
            GameState::SpareARollAgo => "SPARE_A_ROLL_AGO",
            GameState::StrikeARollAgo => "STRIKE_A_ROLL_AGO",
            GameState::ConsecutiveStrikes => "CONSECUTIVE_STRIKES",
            GameState::StrikeTwoRollsAgo => "STRIKE_TWO_ROLLS_AGO",
            GameState::Bonus => "BONUS",
            GameState::GameEnd => "GAME_END",
        }
    }
}

/// Player actions that feed the scoring core.
///
/// Used by the interactive front end; scripted and random games feed pin
/// counts directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BowlAction {
    /// Knock down this many pins (0-9).
    Knock(u8),
    /// Clear a full rack.
    Strike,
    /// Knock down every pin still standing.
    Spare,
    /// Start a fresh game.
    Restart,
}

impl BowlAction {
    /// Pin count this action delivers with `pins_standing` pins up.
    ///
    /// Returns `None` for actions that are not a roll.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bowling_types::BowlAction;
    ///
    /// assert_eq!(BowlAction::Knock(4).pins(10), Some(4));
    /// assert_eq!(BowlAction::Strike.pins(3), Some(10));
    /// assert_eq!(BowlAction::Spare.pins(3), Some(3));
    /// assert_eq!(BowlAction::Restart.pins(10), None);
    /// ```
    pub fn pins(&self, pins_standing: u8) -> Option<i32> {
        match self {
            BowlAction::Knock(n) => Some(*n as i32),
            BowlAction::Strike => Some(PIN_COUNT as i32),
            BowlAction::Spare => Some(pins_standing as i32),
            BowlAction::Restart => None,
        }
    }
}

/// Record of one applied roll, returned by the scoring core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollEvent {
    /// 0-based frame the pins were written into.
    pub frame: usize,
    pub stage: RollStage,
    pub pins: u8,
    /// Bonus points credited to earlier frames by this roll.
    pub credited: u32,
    /// State after the roll.
    pub state: GameState,
    /// Running score after the roll.
    pub score: u32,
}
