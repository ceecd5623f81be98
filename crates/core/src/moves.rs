//! Move sources - where pin counts come from when nobody is typing them
//!
//! - [`ScriptedMoves`]: a fixed list of per-frame rolls, optionally read from
//!   JSON (`[[9,1],[10,null],[10,10,7]]`).
//! - [`RandomBowler`]: seeded random rolls that are always valid for the pins
//!   standing.
//!
//! [`play_out`] drives a [`ScoreKeeper`] from any source.

use std::collections::VecDeque;

use crate::error::{MoveScriptError, ScoreError};
use crate::rng::SimpleRng;
use crate::score_keeper::ScoreKeeper;
use crate::types::RollEvent;

/// Supplies the next roll's pin count.
pub trait MoveSource {
    /// Next pin count, or `None` when the source has run dry.
    fn next_pins(&mut self, pins_standing: u8) -> Option<u8>;
}

/// Rolls replayed from a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedMoves {
    rolls: VecDeque<u8>,
}

impl ScriptedMoves {
    /// Flatten per-frame rolls; `None` entries mark unused slots and are skipped.
    pub fn from_frames(frames: Vec<Vec<Option<u8>>>) -> Self {
        let rolls = frames.into_iter().flatten().flatten().collect();
        Self { rolls }
    }

    pub fn from_rolls(rolls: impl IntoIterator<Item = u8>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Parse a JSON array of per-frame roll arrays.
    pub fn from_json(json: &str) -> Result<Self, MoveScriptError> {
        let frames: Vec<Vec<Option<u8>>> = serde_json::from_str(json)?;
        let moves = Self::from_frames(frames);
        if moves.rolls.is_empty() {
            return Err(MoveScriptError::Empty);
        }
        Ok(moves)
    }

    /// Ten-frame regression game (final score 175).
    pub fn demo() -> Self {
        Self::from_frames(vec![
            vec![Some(9), Some(1)],
            vec![Some(0), Some(10)],
            vec![Some(10), None],
            vec![Some(10), None],
            vec![Some(6), Some(2)],
            vec![Some(7), Some(3)],
            vec![Some(8), Some(2)],
            vec![Some(10), None],
            vec![Some(9), Some(0)],
            vec![Some(10), Some(10), Some(7)],
        ])
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl MoveSource for ScriptedMoves {
    fn next_pins(&mut self, _pins_standing: u8) -> Option<u8> {
        self.rolls.pop_front()
    }
}

/// Seeded random bowler; every roll is valid for the pins standing.
#[derive(Debug, Clone)]
pub struct RandomBowler {
    rng: SimpleRng,
}

impl RandomBowler {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl MoveSource for RandomBowler {
    fn next_pins(&mut self, pins_standing: u8) -> Option<u8> {
        Some(self.rng.next_range(pins_standing as u32 + 1) as u8)
    }
}

/// Feed rolls from `source` until the game ends or the source runs dry.
///
/// Returns the number of rolls applied; stops at the first rejected roll.
pub fn play_out<S>(keeper: &mut ScoreKeeper, source: &mut S) -> Result<usize, ScoreError>
where
    S: MoveSource + ?Sized,
{
    play_out_with(keeper, source, |_, _| {})
}

/// [`play_out`], calling `on_roll` after every applied roll.
pub fn play_out_with<S>(
    keeper: &mut ScoreKeeper,
    source: &mut S,
    mut on_roll: impl FnMut(&ScoreKeeper, &RollEvent),
) -> Result<usize, ScoreError>
where
    S: MoveSource + ?Sized,
{
    let mut applied = 0;
    while !keeper.is_game_over() {
        let Some(pins) = source.next_pins(keeper.pins_standing()) else {
            break;
        };
        let event = keeper.roll(pins as i32)?;
        applied += 1;
        on_roll(keeper, &event);
    }
    Ok(applied)
}
