//! Frame module - a group of roll slots plus bonus credit
//!
//! Ordinary frames hold two rolls, the terminal frame holds three. Rolls are
//! stored inline so a game's frames never allocate after construction.
//!
//! A frame's [`FrameState`] is derived from its rolls on every read, except
//! for the terminal frame which is pinned to [`FrameState::Last`].

use arrayvec::ArrayVec;

use crate::error::ScoreError;
use crate::roll::Roll;
use crate::types::{FrameState, RollState, FRAME_ROLLS, LAST_FRAME_ROLLS};

/// One scoring unit of a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    rolls: ArrayVec<Roll, LAST_FRAME_ROLLS>,
    last: bool,
    /// Bonus pins credited by later rolls (strike/spare resolution).
    addend: u32,
}

impl Frame {
    /// Ordinary two-roll frame.
    pub fn new() -> Self {
        Self::with_rolls(FRAME_ROLLS, false)
    }

    /// Terminal three-roll frame, pinned to [`FrameState::Last`].
    pub fn new_last() -> Self {
        Self::with_rolls(LAST_FRAME_ROLLS, true)
    }

    fn with_rolls(count: usize, last: bool) -> Self {
        let mut rolls = ArrayVec::new();
        for _ in 0..count {
            rolls.push(Roll::EMPTY);
        }
        Self {
            rolls,
            last,
            addend: 0,
        }
    }

    pub fn is_last(&self) -> bool {
        self.last
    }

    pub fn rolls(&self) -> &[Roll] {
        &self.rolls
    }

    pub fn roll(&self, index: usize) -> Result<&Roll, ScoreError> {
        self.rolls.get(index).ok_or(ScoreError::IndexOutOfRange {
            index,
            len: self.rolls.len(),
        })
    }

    /// Replace a roll slot. The frame score follows since it is derived.
    pub fn set_roll(&mut self, index: usize, roll: Roll) -> Result<(), ScoreError> {
        let len = self.rolls.len();
        let slot = self
            .rolls
            .get_mut(index)
            .ok_or(ScoreError::IndexOutOfRange { index, len })?;
        *slot = roll;
        Ok(())
    }

    /// Write pins into a slot the state machine has already bounds-checked.
    pub(crate) fn record(&mut self, index: usize, pins: u8, state: RollState) {
        self.rolls[index].apply(pins, state);
    }

    pub(crate) fn mark(&mut self, index: usize, state: RollState) {
        self.rolls[index].mark(state);
    }

    /// Frame classification; `Last` for the terminal frame.
    pub fn state(&self) -> FrameState {
        if self.last {
            FrameState::Last
        } else {
            self.classification()
        }
    }

    /// Classification derived from the roll states, ignoring the `Last` pin.
    pub fn classification(&self) -> FrameState {
        let first = self.rolls[0].state();
        let second = self.rolls[1].state();

        if first == RollState::Strike {
            FrameState::Strike
        } else if second == RollState::Spare {
            FrameState::Spare
        } else if first == RollState::Open {
            FrameState::Open
        } else {
            FrameState::Empty
        }
    }

    pub fn addend(&self) -> u32 {
        self.addend
    }

    pub(crate) fn add_addend(&mut self, pins: u8) {
        self.addend += pins as u32;
    }

    /// Pins knocked down in this frame, without bonus.
    pub fn pins_down(&self) -> u32 {
        self.rolls.iter().map(|r| r.score() as u32).sum()
    }

    /// Frame score: pins knocked down plus bonus credit.
    pub fn score(&self) -> u32 {
        self.pins_down() + self.addend
    }

    /// Scoreboard glyphs; the third slot is empty on ordinary frames.
    pub fn symbols(&self) -> [&'static str; LAST_FRAME_ROLLS] {
        let mut out = [""; LAST_FRAME_ROLLS];
        for (slot, roll) in out.iter_mut().zip(self.rolls.iter()) {
            *slot = roll.symbol();
        }
        out
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}
