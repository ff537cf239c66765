//! Bit-packed sets of board positions
//!
//! ```text
//!             ┌─┬─┬─┬─┬─┬─┬─┐ rows
//!             ├─┼─┼─┼─┼─┼─┼─┤ 5
//!             ├─┼─┼─┼─┼─┼─┼─┤ 4
//!             ├─┼─┼─┼─┼─┼─┼─┤ 3
//!             ├─┼─┼─┼─┼─┼─┼─┤ 2
//!             ├─┼─┼─┼─┼─┼─┼─┤ 1
//!             └─┴─┴─┴─┴─┴─┴─┘ 0
//!     columns  0 1 2 3 4 5 6
//! ```
//!
//! Each column is an 8-bit lane of the word with row 0 in the lowest bit.
//! Bits 6 and 7 of every lane are guard bits: they are never set, so shifting
//! a grid can never carry a piece from one column into a valid cell of
//! another.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor};
use std::str::FromStr;

use crate::{error::ParseError, pos::Position, HEIGHT, LANE_BITS, WIDTH};

mod static_masks {
    use crate::{HEIGHT, LANE_BITS, WIDTH};

    pub const fn bottom_mask() -> u64 {
        let mut mask = 0;
        let mut column = 0;
        while column < WIDTH {
            mask |= 1 << (column * LANE_BITS);
            column += 1;
        }
        mask
    }
    pub const fn full_board_mask() -> u64 {
        bottom_mask() * ((1 << HEIGHT as u64) - 1)
    }
}

/// The mask of all 42 valid positions
pub const FULL_BOARD_MASK: u64 = static_masks::full_board_mask();

const COLUMN_MASK: u64 = (1 << HEIGHT) - 1;

/// A direction along which four pieces can line up, expressed as the bit
/// distance between neighbouring cells.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    Right = 8,
    Up = 1,
    UpRight = 9,
    DownRight = 7,
}

impl Direction {
    /// The order in which `Grid::find_fours` checks the directions
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::UpRight,
        Direction::DownRight,
    ];

    fn distance(self) -> u32 {
        self as u32
    }
}

/// A set of positions stored as a single `u64`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Grid {
    data: u64,
}

impl Grid {
    /// A grid where no position is occupied
    pub const EMPTY: Grid = Grid { data: 0 };

    /// A grid where every position is occupied
    pub const FULL: Grid = Grid {
        data: FULL_BOARD_MASK,
    };

    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Wraps a raw word, rejecting words with bits outside the board
    pub fn from_raw(data: u64) -> Option<Self> {
        if data & !FULL_BOARD_MASK != 0 {
            return None;
        }
        Some(Self { data })
    }

    pub fn raw(&self) -> u64 {
        self.data
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.data & pos.mask() != 0
    }

    /// Adds `pos`, returning whether it was newly inserted
    pub fn insert(&mut self, pos: Position) -> bool {
        let inserted = !self.contains(pos);
        self.data |= pos.mask();
        inserted
    }

    /// Removes `pos`, returning whether it was present
    pub fn remove(&mut self, pos: Position) -> bool {
        let removed = self.contains(pos);
        self.data &= !pos.mask();
        removed
    }

    pub fn union(self, other: Grid) -> Grid {
        Grid {
            data: self.data | other.data,
        }
    }

    pub fn intersection(self, other: Grid) -> Grid {
        Grid {
            data: self.data & other.data,
        }
    }

    pub fn symmetric_difference(self, other: Grid) -> Grid {
        Grid {
            data: self.data ^ other.data,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data == 0
    }

    pub fn len(&self) -> usize {
        self.data.count_ones() as usize
    }

    /// Iterates over the members in ascending bit order without consuming the grid
    pub fn iter(&self) -> GridIter {
        GridIter { data: self.data }
    }

    /// Treating this grid as the set of all occupied cells, finds where a
    /// piece dropped into `column` comes to rest.
    ///
    /// Returns `None` if the column is full or out of range. A column with a
    /// gap below an occupied cell cannot arise in play and also yields `None`.
    pub fn drop_target(&self, column: usize) -> Option<Position> {
        if column >= WIDTH {
            return None;
        }
        let row = match (self.data >> (column * LANE_BITS)) & COLUMN_MASK {
            0b000000 => 0,
            0b000001 => 1,
            0b000011 => 2,
            0b000111 => 3,
            0b001111 => 4,
            0b011111 => 5,
            // column is full, or holds a floating piece
            _ => return None,
        };
        Some(Position::new(row, column))
    }

    /// Finds the cells taking part in four-in-a-row runs.
    ///
    /// Directions are checked right, up, up-right, down-right; only the runs
    /// of the first direction with any run are reported.
    pub fn find_fours(&self) -> Option<Grid> {
        Direction::ALL
            .iter()
            .map(|&direction| self.find_fours_in(direction))
            .find(|grid| !grid.is_empty())
    }

    /// Finds every cell taking part in a run of at least four along `direction`
    pub fn find_fours_in(&self, direction: Direction) -> Grid {
        let distance = direction.distance();

        // after three shift-and-intersect steps a bit survives only where it
        // starts a run of four
        let mut shifted = self.data;
        let mut ends = self.data;
        for _ in 0..3 {
            if ends == 0 {
                return Grid::EMPTY;
            }
            shifted >>= distance;
            ends &= shifted;
        }
        if ends == 0 {
            return Grid::EMPTY;
        }

        // grow the run starts back out to the full runs
        let mut run = ends;
        let mut cells = ends;
        for _ in 0..3 {
            run <<= distance;
            cells |= run;
        }
        Grid {
            data: cells & FULL_BOARD_MASK,
        }
    }

    /// Checks for four in a row in any direction
    pub fn is_win(&self) -> bool {
        Direction::ALL.iter().any(|&direction| {
            let distance = direction.distance();
            let pairs = self.data & (self.data >> distance);
            pairs & (pairs >> (2 * distance)) != 0
        })
    }

    /// The raw word in hexadecimal, for logs
    pub fn short_description(&self) -> String {
        format!("{:#x}", self.data)
    }
}

/// Splits a six-line snapshot into cells, calling `cell` for every position
/// from the top row down.
pub(crate) fn parse_cells<F>(text: &str, mut cell: F) -> Result<(), ParseError>
where
    F: FnMut(Position, char) -> Result<(), ParseError>,
{
    let rows: Vec<&str> = text.trim().lines().map(str::trim).collect();
    if rows.len() != HEIGHT {
        return Err(ParseError::RowCount { found: rows.len() });
    }
    for (line, cells) in rows.iter().enumerate() {
        let row = HEIGHT - 1 - line;
        // emoji snapshots may carry variation selectors after each glyph
        let glyphs: Vec<char> = cells.chars().filter(|&c| c != '\u{fe0f}').collect();
        if glyphs.len() != WIDTH {
            return Err(ParseError::ColumnCount {
                row,
                found: glyphs.len(),
            });
        }
        for (col, &glyph) in glyphs.iter().enumerate() {
            cell(Position::new(row, col), glyph)?;
        }
    }
    Ok(())
}

/// Renders a six-line snapshot, top row first
pub(crate) fn format_cells<F>(f: &mut fmt::Formatter<'_>, cell: F) -> fmt::Result
where
    F: Fn(Position) -> char,
{
    for row in (0..HEIGHT).rev() {
        for col in 0..WIDTH {
            write!(f, "{}", cell(Position::new(row, col)))?;
        }
        if row != 0 {
            writeln!(f)?;
        }
    }
    Ok(())
}

impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut grid = Grid::new();
        parse_cells(text, |pos, glyph| match glyph {
            'O' => {
                grid.insert(pos);
                Ok(())
            }
            '·' | '.' => Ok(()),
            _ => Err(ParseError::UnknownGlyph { glyph }),
        })?;
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_cells(f, |pos| if self.contains(pos) { 'O' } else { '·' })
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({:#x})", self.data)
    }
}

impl fmt::LowerHex for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.data, f)
    }
}

impl BitOr for Grid {
    type Output = Grid;

    fn bitor(self, other: Grid) -> Grid {
        self.union(other)
    }
}

impl BitAnd for Grid {
    type Output = Grid;

    fn bitand(self, other: Grid) -> Grid {
        self.intersection(other)
    }
}

impl BitXor for Grid {
    type Output = Grid;

    fn bitxor(self, other: Grid) -> Grid {
        self.symmetric_difference(other)
    }
}

/// Iterator over the positions of a grid, lowest bit first.
///
/// It drains its own copy of the word, so the grid it came from is untouched.
#[derive(Copy, Clone, Debug)]
pub struct GridIter {
    data: u64,
}

impl Iterator for GridIter {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.data == 0 {
            return None;
        }
        let pos = Position::from_bit(self.data.trailing_zeros());
        // clear the lowest set bit
        self.data &= self.data - 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.data.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for GridIter {}

impl IntoIterator for Grid {
    type Item = Position;
    type IntoIter = GridIter;

    fn into_iter(self) -> GridIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = Position;
    type IntoIter = GridIter;

    fn into_iter(self) -> GridIter {
        self.iter()
    }
}
