//! Reels and the reel bank

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::LosingRow;
use crate::paytable;
use crate::symbols::Symbol;

/// Slots in one reel row
pub const SLOTS_PER_REEL: usize = 3;
/// Rows in the bank
pub const REEL_COUNT: usize = 3;

/// Row-major snapshot of the full grid
pub type Grid = [[Symbol; SLOTS_PER_REEL]; REEL_COUNT];

/// One row of three symbol slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reel {
    slots: [Symbol; SLOTS_PER_REEL],
}

impl Reel {
    /// A fresh reel shows bells across
    pub fn new() -> Self {
        Self {
            slots: [Symbol::Bell; SLOTS_PER_REEL],
        }
    }

    /// Redraw every slot from the weight table, each independently
    pub fn spin<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for slot in &mut self.slots {
            *slot = Symbol::draw(rng);
        }
    }

    /// Score the row against the payout table
    pub fn evaluate(&self) -> Result<i64, LosingRow> {
        paytable::evaluate_row(&self.slots)
    }

    /// Current slots in order
    pub fn slots(&self) -> &[Symbol; SLOTS_PER_REEL] {
        &self.slots
    }

    /// Overwrite the slots, staging a scripted outcome
    pub fn set_slots(&mut self, slots: [Symbol; SLOTS_PER_REEL]) {
        self.slots = slots;
    }
}

impl Default for Reel {
    fn default() -> Self {
        Self::new()
    }
}

/// The full 3×3 grid: three reels spun and scored together.
///
/// One bank belongs to one game; it is never resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReelBank {
    reels: [Reel; REEL_COUNT],
}

impl ReelBank {
    /// A fresh bank: every reel in its all-bell default
    pub fn new() -> Self {
        Self {
            reels: [Reel::new(); REEL_COUNT],
        }
    }

    /// Spin every reel; no early exit
    pub fn spin<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for reel in &mut self.reels {
            reel.spin(rng);
        }
    }

    /// Sum the row payouts in row order.
    ///
    /// Halts on the first losing row: later rows are not scored and any
    /// partial sum is discarded.
    pub fn evaluate(&self) -> Result<i64, LosingRow> {
        let mut total = 0;
        for reel in &self.reels {
            total += reel.evaluate()?;
        }
        Ok(total)
    }

    /// Put every reel back to the all-bell default
    pub fn to_default(&mut self) {
        for reel in &mut self.reels {
            *reel = Reel::new();
        }
    }

    /// The reels in row order
    pub fn reels(&self) -> &[Reel; REEL_COUNT] {
        &self.reels
    }

    /// Row-major copy of all nine slots
    pub fn grid(&self) -> Grid {
        self.reels.map(|reel| reel.slots)
    }

    /// Overwrite one row (0, 1 or 2), staging a scripted outcome
    pub fn set_row(&mut self, row: usize, slots: [Symbol; SLOTS_PER_REEL]) {
        self.reels[row].set_slots(slots);
    }

    /// Overwrite the whole grid, staging a scripted outcome
    pub fn set_grid(&mut self, grid: Grid) {
        for (reel, slots) in self.reels.iter_mut().zip(grid) {
            reel.set_slots(slots);
        }
    }
}

impl Default for ReelBank {
    fn default() -> Self {
        Self::new()
    }
}
