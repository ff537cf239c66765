use std::fmt;

use crate::{HEIGHT, LANE_BITS, WIDTH};

/// A cell of the board, identified by its bit index in a grid word.
///
/// Columns occupy consecutive 8-bit lanes and rows the low 6 bits of each
/// lane, so the index of `(row, col)` is `col * 8 + row`. Positions compare by
/// bit index, which orders them column by column, bottom to top.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Position {
    bit: u8,
}

impl Position {
    /// Creates the position at `row` (counted from the bottom) and `col`
    /// (counted from the left).
    ///
    /// # Panics
    /// Panics if `row >= HEIGHT` or `col >= WIDTH`.
    pub fn new(row: usize, col: usize) -> Self {
        assert!(row < HEIGHT, "row {} out of range", row);
        assert!(col < WIDTH, "column {} out of range", col);
        Self {
            bit: (col * LANE_BITS + row) as u8,
        }
    }

    // trusted, callers only pass indices taken from a valid grid word
    pub(crate) fn from_bit(bit: u32) -> Self {
        debug_assert!((bit as usize) % LANE_BITS < HEIGHT && (bit as usize) / LANE_BITS < WIDTH);
        Self { bit: bit as u8 }
    }

    pub fn row(self) -> usize {
        self.bit as usize % LANE_BITS
    }

    pub fn col(self) -> usize {
        self.bit as usize / LANE_BITS
    }

    /// The index of this position's bit in a grid word
    pub fn bit(self) -> usize {
        self.bit as usize
    }

    pub(crate) fn mask(self) -> u64 {
        1 << self.bit
    }

    /// All 42 positions in bit order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..WIDTH).flat_map(|col| (0..HEIGHT).map(move |row| Position::new(row, col)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[row: {}, col: {}]", self.row(), self.col())
    }
}
