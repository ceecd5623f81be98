//! A single delivery: pins knocked down plus its classification.

use crate::types::{pin_symbol, RollState};

/// One roll slot of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Roll {
    score: u8,
    state: RollState,
}

impl Roll {
    /// An unrolled slot.
    pub const EMPTY: Roll = Roll {
        score: 0,
        state: RollState::Empty,
    };

    pub fn new(score: u8, state: RollState) -> Self {
        Self { score, state }
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn state(&self) -> RollState {
        self.state
    }

    pub fn is_empty(&self) -> bool {
        self.state == RollState::Empty
    }

    /// Record `pins` with an explicit classification.
    ///
    /// Classification is never inferred from the pin count; the scoring state
    /// machine decides whether ten pins is a strike or a spare.
    pub fn apply(&mut self, pins: u8, state: RollState) {
        self.score = pins;
        self.state = state;
    }

    /// Reclassify without touching the pin count.
    pub fn mark(&mut self, state: RollState) {
        self.state = state;
    }

    /// Scoreboard glyph.
    pub fn symbol(&self) -> &'static str {
        self.state
            .symbol()
            .unwrap_or_else(|| pin_symbol(self.score))
    }
}
