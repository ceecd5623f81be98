//! Score keeper module - the scoring state machine
//!
//! [`ScoreKeeper`] owns every frame of one game and interprets each incoming
//! roll: it validates the pin count, writes it into the right roll slot,
//! credits pending strike/spare bonuses to earlier frames and moves to the
//! next [`GameState`].
//!
//! Bonus credit is tracked in a [`BonusLedger`] of explicit obligations, so
//! the state machine only has to decide which roll slot the pins land in. The
//! `*Ago` states still name which earlier frames the next roll pays, and the
//! two always agree (checked in debug builds).

use crate::error::ScoreError;
use crate::frame::Frame;
use crate::ledger::BonusLedger;
use crate::snapshot::{FrameSnapshot, GameSnapshot};
use crate::types::*;

/// Scoring state for one single-player game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreKeeper {
    frames: Vec<Frame>,
    /// Frame currently accepting rolls.
    frame_index: usize,
    state: GameState,
    /// Running total of every pin credited, bonuses included.
    score: u32,
    /// Pins available for the next roll in the current frame.
    pins_standing: u8,
    rounds: usize,
    ledger: BonusLedger,
}

impl ScoreKeeper {
    /// Standard ten-frame game.
    pub fn new() -> Self {
        Self::fresh(DEFAULT_ROUNDS)
    }

    /// Game with `rounds` frames; the last one is the three-roll frame.
    pub fn with_rounds(rounds: usize) -> Result<Self, ScoreError> {
        if rounds == 0 {
            return Err(ScoreError::NoFrames);
        }
        if rounds > MAX_ROUNDS {
            return Err(ScoreError::TooManyRounds {
                rounds,
                max: MAX_ROUNDS,
            });
        }
        Ok(Self::fresh(rounds))
    }

    fn fresh(rounds: usize) -> Self {
        let mut frames: Vec<Frame> = (0..rounds - 1).map(|_| Frame::new()).collect();
        frames.push(Frame::new_last());

        Self {
            frames,
            frame_index: 0,
            state: GameState::FirstRoll,
            score: 0,
            pins_standing: PIN_COUNT,
            rounds,
            ledger: BonusLedger::new(),
        }
    }

    /// Start over with the same number of frames.
    pub fn reset(&mut self) {
        tracing::debug!(rounds = self.rounds, final_score = self.score, "game reset");
        *self = Self::fresh(self.rounds);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn pins_standing(&self) -> u8 {
        self.pins_standing
    }

    pub fn current_frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn roll_stage(&self) -> RollStage {
        self.state.roll_stage()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn pending_bonuses(&self) -> &BonusLedger {
        &self.ledger
    }

    fn on_last_frame(&self) -> bool {
        self.frame_index + 1 == self.rounds
    }

    /// Rolls still needed to finish the game from here.
    ///
    /// Ordinary frames count as two rolls and the terminal frame as its worst
    /// case of three.
    pub fn moves_remaining(&self) -> usize {
        let stage = match self.roll_stage().number() {
            Some(n) => n as usize,
            None => return 0,
        };

        if self.on_last_frame() {
            let first_was_strike =
                self.frames[self.frame_index].classification() == FrameState::Strike;
            return match stage {
                2 if first_was_strike => 2,
                3 => 1,
                _ => 2 - (stage - 1),
            };
        }

        let frames_remaining = self.rounds - self.frame_index - 1;
        (frames_remaining * 2 + 3) - (stage - 1)
    }

    /// Cumulative score shown under each frame, `None` until it is rolled.
    pub fn running_totals(&self) -> Vec<Option<u32>> {
        let mut cumulative = 0;
        self.frames
            .iter()
            .map(|frame| {
                let [first, second, ..] = frame.rolls() else {
                    return None;
                };
                let shown = if !second.is_empty() {
                    Some(cumulative + frame.score())
                } else if !first.is_empty() {
                    Some(cumulative + first.score() as u32)
                } else {
                    None
                };
                cumulative += frame.score();
                shown
            })
            .collect()
    }

    /// Apply one roll.
    ///
    /// Fails with [`ScoreError::InvalidRoll`] when `pins` is negative or more
    /// than the pins standing, and with [`ScoreError::GameOver`] once the game
    /// has ended. Either way nothing changes.
    pub fn roll(&mut self, pins: i32) -> Result<RollEvent, ScoreError> {
        let pins = match u8::try_from(pins) {
            Ok(p) if p <= self.pins_standing => p,
            _ => {
                tracing::debug!(pins, standing = self.pins_standing, "roll rejected");
                return Err(ScoreError::InvalidRoll {
                    pins,
                    standing: self.pins_standing,
                });
            }
        };

        if self.state.is_over() {
            tracing::debug!(pins, score = self.score, "roll after game end rejected");
            return Err(ScoreError::GameOver { score: self.score });
        }

        let frame = self.frame_index;
        let stage = self.state.roll_stage();

        self.score += pins as u32;

        let credited = match self.state {
            GameState::Bonus => 0,
            _ => self.ledger.settle(pins, &mut self.frames),
        };
        self.score += credited;

        match self.state {
            GameState::FirstRoll | GameState::SpareARollAgo => {
                self.first_roll(GameState::StrikeARollAgo, GameState::SecondRoll, pins)
            }
            GameState::StrikeARollAgo | GameState::ConsecutiveStrikes => self.first_roll(
                GameState::ConsecutiveStrikes,
                GameState::StrikeTwoRollsAgo,
                pins,
            ),
            GameState::SecondRoll | GameState::StrikeTwoRollsAgo => {
                self.second_roll(GameState::SpareARollAgo, GameState::FirstRoll, pins)
            }
            GameState::Bonus => self.bonus_roll(pins),
            GameState::GameEnd => {}
        }

        debug_assert_eq!(self.state.pending_credits(), self.ledger.len());

        tracing::debug!(
            frame = frame + 1,
            pins,
            credited,
            score = self.score,
            state = self.state.as_str(),
            "roll applied"
        );

        Ok(RollEvent {
            frame,
            stage,
            pins,
            credited,
            state: self.state,
            score: self.score,
        })
    }

    fn first_roll(&mut self, strike_target: GameState, other_target: GameState, pins: u8) {
        let index = self.frame_index;
        let frame = &mut self.frames[index];

        if pins == PIN_COUNT {
            frame.record(0, pins, RollState::Strike);
            if frame.is_last() {
                // Still owed the second and third rolls of the terminal frame.
                self.state = other_target;
            } else {
                frame.mark(1, RollState::Striked);
                self.ledger.owe(index, STRIKE_BONUS_ROLLS);
                self.frame_index += 1;
                self.state = strike_target;
            }
        } else {
            frame.record(0, pins, RollState::Open);
            self.pins_standing -= pins;
            self.state = other_target;
        }
    }

    fn second_roll(&mut self, spare_target: GameState, other_target: GameState, pins: u8) {
        let index = self.frame_index;
        let frame = &mut self.frames[index];
        let first = frame.rolls()[0];
        let total = first.score() + pins;

        if frame.is_last() {
            let (roll_state, next) = if pins == PIN_COUNT {
                let state = if first.state() == RollState::Strike {
                    RollState::Strike
                } else {
                    RollState::Spare
                };
                (state, GameState::Bonus)
            } else if total >= PIN_COUNT {
                (RollState::Spare, GameState::Bonus)
            } else {
                (RollState::Open, GameState::GameEnd)
            };
            frame.record(1, pins, roll_state);
            self.state = next;
            self.reset_pins();
            return;
        }

        if total == PIN_COUNT {
            frame.record(1, pins, RollState::Spare);
            self.ledger.owe(index, SPARE_BONUS_ROLLS);
            self.state = spare_target;
        } else {
            frame.record(1, pins, RollState::Open);
            self.state = other_target;
        }
        self.reset_pins();
        self.frame_index += 1;
    }

    fn bonus_roll(&mut self, pins: u8) {
        let state = if pins == PIN_COUNT {
            RollState::Strike
        } else {
            RollState::Open
        };
        self.frames[self.frame_index].record(2, pins, state);
        self.state = GameState::GameEnd;
    }

    fn reset_pins(&mut self) {
        self.pins_standing = PIN_COUNT;
    }

    /// Read-only view for scoreboards and serialisation.
    pub fn snapshot(&self) -> GameSnapshot {
        let frames = self
            .frames
            .iter()
            .zip(self.running_totals())
            .enumerate()
            .map(|(i, (frame, running_total))| FrameSnapshot {
                number: i + 1,
                state: frame.state().as_str(),
                symbols: frame.symbols(),
                last: frame.is_last(),
                addend: frame.addend(),
                score: frame.score(),
                running_total,
            })
            .collect();

        GameSnapshot {
            rounds: self.rounds,
            frame: self.frame_index + 1,
            pins_standing: self.pins_standing,
            score: self.score,
            state: self.state.as_str(),
            stage: self.roll_stage().label(),
            moves_remaining: self.moves_remaining(),
            game_over: self.is_game_over(),
            frames,
        }
    }
}

impl Default for ScoreKeeper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roll_all(keeper: &mut ScoreKeeper, rolls: &[i32]) {
        for &pins in rolls {
            keeper.roll(pins).unwrap();
        }
    }

    #[test]
    fn test_new_game() {
        let keeper = ScoreKeeper::new();
        assert_eq!(keeper.frames().len(), 10);
        assert_eq!(keeper.frames().iter().filter(|f| f.is_last()).count(), 1);
        assert!(keeper.frames()[9].is_last());
        assert_eq!(keeper.state(), GameState::FirstRoll);
        assert_eq!(keeper.score(), 0);
        assert_eq!(keeper.pins_standing(), 10);
        assert_eq!(keeper.current_frame_index(), 0);
        assert_eq!(keeper.moves_remaining(), 21);
    }

    #[test]
    fn test_round_limits() {
        assert_eq!(ScoreKeeper::with_rounds(0), Err(ScoreError::NoFrames));
        assert_eq!(
            ScoreKeeper::with_rounds(40_000),
            Err(ScoreError::TooManyRounds {
                rounds: 40_000,
                max: MAX_ROUNDS
            })
        );
        assert!(ScoreKeeper::with_rounds(MAX_ROUNDS).is_ok());
        let keeper = ScoreKeeper::with_rounds(3).unwrap();
        assert_eq!(keeper.frames().len(), 3);
        assert!(keeper.frames()[2].is_last());
    }

    #[test]
    fn test_open_frame_transitions() {
        let mut keeper = ScoreKeeper::new();

        let event = keeper.roll(3).unwrap();
        assert_eq!(event.stage, RollStage::First);
        assert_eq!(keeper.state(), GameState::SecondRoll);
        assert_eq!(keeper.pins_standing(), 7);
        assert_eq!(keeper.current_frame_index(), 0);

        let event = keeper.roll(4).unwrap();
        assert_eq!(event.stage, RollStage::Second);
        assert_eq!(keeper.state(), GameState::FirstRoll);
        assert_eq!(keeper.pins_standing(), 10);
        assert_eq!(keeper.current_frame_index(), 1);
        assert_eq!(keeper.frames()[0].state(), FrameState::Open);
        assert_eq!(keeper.score(), 7);
    }

    #[test]
    fn test_spare_credits_next_roll() {
        let mut keeper = ScoreKeeper::new();
        roll_all(&mut keeper, &[5, 5]);
        assert_eq!(keeper.state(), GameState::SpareARollAgo);
        assert_eq!(keeper.frames()[0].state(), FrameState::Spare);

        let event = keeper.roll(3).unwrap();
        assert_eq!(event.credited, 3);
        assert_eq!(keeper.frames()[0].addend(), 3);
        assert_eq!(keeper.frames()[0].score(), 13);
        assert_eq!(keeper.frames()[1].score(), 3);
        assert_eq!(keeper.state(), GameState::SecondRoll);
        assert_eq!(keeper.score(), 16);
    }

    #[test]
    fn test_strike_credits_next_two_rolls() {
        let mut keeper = ScoreKeeper::new();
        keeper.roll(10).unwrap();
        assert_eq!(keeper.state(), GameState::StrikeARollAgo);
        assert_eq!(keeper.current_frame_index(), 1);
        assert_eq!(keeper.frames()[0].rolls()[1].state(), RollState::Striked);

        keeper.roll(3).unwrap();
        assert_eq!(keeper.state(), GameState::StrikeTwoRollsAgo);
        keeper.roll(4).unwrap();
        assert_eq!(keeper.state(), GameState::FirstRoll);

        assert_eq!(keeper.frames()[0].score(), 17);
        assert_eq!(keeper.frames()[1].score(), 7);
        assert_eq!(keeper.score(), 24);
    }

    #[test]
    fn test_consecutive_strikes_pay_two_frames() {
        let mut keeper = ScoreKeeper::new();
        roll_all(&mut keeper, &[10, 10]);
        assert_eq!(keeper.state(), GameState::ConsecutiveStrikes);

        let event = keeper.roll(10).unwrap();
        assert_eq!(event.credited, 20);
        assert_eq!(keeper.state(), GameState::ConsecutiveStrikes);
        assert_eq!(keeper.frames()[0].score(), 30);

        keeper.roll(2).unwrap();
        assert_eq!(keeper.state(), GameState::StrikeTwoRollsAgo);
        assert_eq!(keeper.frames()[1].score(), 22);
    }

    #[test]
    fn test_strike_then_spare() {
        let mut keeper = ScoreKeeper::new();
        roll_all(&mut keeper, &[10, 6, 4]);
        assert_eq!(keeper.state(), GameState::SpareARollAgo);
        assert_eq!(keeper.frames()[0].score(), 20);

        keeper.roll(8).unwrap();
        assert_eq!(keeper.frames()[1].score(), 18);
    }

    #[test]
    fn test_gutter_then_ten_is_a_spare() {
        let mut keeper = ScoreKeeper::new();
        roll_all(&mut keeper, &[0, 10]);
        let frame = &keeper.frames()[0];
        assert_eq!(frame.rolls()[1].state(), RollState::Spare);
        assert_eq!(frame.symbols(), ["-", "/", ""]);
        assert_eq!(keeper.state(), GameState::SpareARollAgo);
    }

    #[test]
    fn test_invalid_roll_leaves_state_unchanged() {
        let mut keeper = ScoreKeeper::new();
        keeper.roll(6).unwrap();
        let before = keeper.clone();

        assert_eq!(
            keeper.roll(5),
            Err(ScoreError::InvalidRoll { pins: 5, standing: 4 })
        );
        assert_eq!(
            keeper.roll(-1),
            Err(ScoreError::InvalidRoll { pins: -1, standing: 4 })
        );
        assert_eq!(
            keeper.roll(300),
            Err(ScoreError::InvalidRoll { pins: 300, standing: 4 })
        );
        assert_eq!(keeper, before);
    }

    #[test]
    fn test_last_frame_strike_keeps_frame() {
        let mut keeper = ScoreKeeper::new();
        roll_all(&mut keeper, &[0; 18]);
        assert_eq!(keeper.current_frame_index(), 9);
        assert_eq!(keeper.moves_remaining(), 2);

        keeper.roll(10).unwrap();
        assert_eq!(keeper.current_frame_index(), 9);
        assert_eq!(keeper.state(), GameState::SecondRoll);
        assert_eq!(keeper.pins_standing(), 10);
        assert_eq!(keeper.moves_remaining(), 2);

        keeper.roll(10).unwrap();
        assert_eq!(keeper.state(), GameState::Bonus);
        assert_eq!(keeper.frames()[9].rolls()[1].state(), RollState::Strike);
        assert_eq!(keeper.moves_remaining(), 1);

        keeper.roll(10).unwrap();
        assert!(keeper.is_game_over());
        assert_eq!(keeper.score(), 30);
        assert_eq!(keeper.frames()[9].symbols(), ["X", "X", "X"]);
    }

    #[test]
    fn test_last_frame_open_ends_game() {
        let mut keeper = ScoreKeeper::new();
        roll_all(&mut keeper, &[0; 18]);
        roll_all(&mut keeper, &[3, 4]);
        assert!(keeper.is_game_over());
        assert_eq!(keeper.frames()[9].symbols(), ["3", "4", ""]);
        assert_eq!(keeper.moves_remaining(), 0);
    }

    #[test]
    fn test_last_frame_spare_earns_bonus() {
        let mut keeper = ScoreKeeper::new();
        roll_all(&mut keeper, &[0; 18]);
        roll_all(&mut keeper, &[3, 7]);
        assert_eq!(keeper.state(), GameState::Bonus);
        assert_eq!(keeper.pins_standing(), 10);

        keeper.roll(5).unwrap();
        assert!(keeper.is_game_over());
        assert_eq!(keeper.frames()[9].symbols(), ["3", "/", "5"]);
        assert_eq!(keeper.score(), 15);
    }

    #[test]
    fn test_last_frame_gutter_then_ten_is_a_spare() {
        let mut keeper = ScoreKeeper::new();
        roll_all(&mut keeper, &[0; 18]);
        roll_all(&mut keeper, &[0, 10]);
        let frame = &keeper.frames()[9];
        assert_eq!(frame.rolls()[1].state(), RollState::Spare);
        assert_eq!(frame.symbols(), ["-", "/", ""]);
        assert_eq!(keeper.state(), GameState::Bonus);
        assert_eq!(keeper.pins_standing(), 10);
        assert_eq!(keeper.moves_remaining(), 1);

        keeper.roll(10).unwrap();
        assert!(keeper.is_game_over());
        assert_eq!(keeper.score(), 20);
    }

    #[test]
    fn test_last_frame_strike_then_open_second() {
        // A second roll under ten after a terminal strike is classified as a
        // spare and racks a full set for the bonus roll.
        let mut keeper = ScoreKeeper::new();
        roll_all(&mut keeper, &[0; 18]);
        roll_all(&mut keeper, &[10, 5]);
        assert_eq!(keeper.state(), GameState::Bonus);
        assert_eq!(keeper.frames()[9].rolls()[1].state(), RollState::Spare);
        assert_eq!(keeper.pins_standing(), 10);

        keeper.roll(10).unwrap();
        assert_eq!(keeper.score(), 25);
    }

    #[test]
    fn test_strike_in_ninth_paid_by_last_frame() {
        let mut keeper = ScoreKeeper::new();
        roll_all(&mut keeper, &[0; 16]);
        roll_all(&mut keeper, &[10, 10]);
        assert_eq!(keeper.state(), GameState::StrikeTwoRollsAgo);
        assert_eq!(keeper.pending_bonuses().len(), 1);

        roll_all(&mut keeper, &[4, 3]);
        assert!(keeper.pending_bonuses().is_empty());
        assert_eq!(keeper.frames()[8].score(), 24);
        assert_eq!(keeper.score(), 24 + 17);
    }

    #[test]
    fn test_roll_after_game_end_rejected() {
        let mut keeper = ScoreKeeper::new();
        roll_all(&mut keeper, &[0; 20]);
        assert!(keeper.is_game_over());
        let before = keeper.clone();

        assert_eq!(keeper.roll(3), Err(ScoreError::GameOver { score: 0 }));
        assert_eq!(keeper, before);
    }

    #[test]
    fn test_reset_starts_fresh_game() {
        let mut keeper = ScoreKeeper::with_rounds(4).unwrap();
        roll_all(&mut keeper, &[10, 3, 4]);
        keeper.reset();
        assert_eq!(keeper, ScoreKeeper::with_rounds(4).unwrap());
    }

    #[test]
    fn test_single_frame_game() {
        let mut keeper = ScoreKeeper::with_rounds(1).unwrap();
        assert_eq!(keeper.moves_remaining(), 2);
        roll_all(&mut keeper, &[10, 10, 10]);
        assert!(keeper.is_game_over());
        assert_eq!(keeper.score(), 30);
    }

    #[test]
    fn test_running_totals() {
        let mut keeper = ScoreKeeper::new();
        roll_all(&mut keeper, &[5, 5, 3]);
        let totals = keeper.running_totals();
        assert_eq!(totals[0], Some(13));
        assert_eq!(totals[1], Some(16));
        assert_eq!(totals[2], None);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut keeper = ScoreKeeper::new();
        roll_all(&mut keeper, &[10, 3]);
        let snap = keeper.snapshot();
        assert_eq!(snap.frame, 2);
        assert_eq!(snap.score, 16);
        assert_eq!(snap.pins_standing, 7);
        assert_eq!(snap.state, "STRIKE_TWO_ROLLS_AGO");
        assert_eq!(snap.stage, "Second Roll");
        assert_eq!(snap.frames.len(), 10);
        assert_eq!(snap.frames[0].symbols, ["X", "", ""]);
        assert_eq!(snap.frames[0].running_total, Some(13));
        assert!(snap.frames[9].last);
        assert!(!snap.game_over);
    }
}
