//! Pending strike/spare bonuses.
//!
//! A strike is owed the pins of the next two rolls, a spare the next one. At
//! most two frames can be waiting at once (a strike followed by a strike), so
//! the ledger lives inline.

use arrayvec::ArrayVec;

use crate::frame::Frame;

/// Maximum simultaneous obligations: two back-to-back strikes.
pub const MAX_PENDING_BONUSES: usize = 2;

/// A frame still waiting for bonus rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BonusDebt {
    pub frame: usize,
    pub rolls_owed: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BonusLedger {
    owed: ArrayVec<BonusDebt, MAX_PENDING_BONUSES>,
}

impl BonusLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.owed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owed.is_empty()
    }

    pub fn debts(&self) -> &[BonusDebt] {
        &self.owed
    }

    /// Record that `frame` is owed the pins of the next `rolls` rolls.
    ///
    /// Must be called after [`settle`](Self::settle) for the same roll, which
    /// is what keeps the ledger within capacity.
    pub fn owe(&mut self, frame: usize, rolls: u8) {
        debug_assert!(rolls > 0);
        self.owed.push(BonusDebt {
            frame,
            rolls_owed: rolls,
        });
    }

    /// Credit `pins` to every waiting frame and drop the fully paid ones.
    ///
    /// Returns the total points credited.
    pub fn settle(&mut self, pins: u8, frames: &mut [Frame]) -> u32 {
        let mut credited = 0;
        for debt in self.owed.iter_mut() {
            frames[debt.frame].add_addend(pins);
            debt.rolls_owed -= 1;
            credited += pins as u32;
            tracing::trace!(frame = debt.frame, pins, rolls_owed = debt.rolls_owed, "bonus credited");
        }
        self.owed.retain(|debt| debt.rolls_owed > 0);
        credited
    }
}
