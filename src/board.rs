use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::{
    error::ParseError,
    grid::{format_cells, parse_cells, Grid},
    player::Player,
    pos::Position,
    MAX_MOVES,
};

/// Glyph of an unoccupied cell in board snapshots
pub const EMPTY_GLYPH: char = '⚪';

/// The pieces of both players, one grid each.
///
/// The two grids never share a cell.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Board {
    odd: Grid,
    even: Grid,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from each player's grid, failing if they overlap
    pub fn from_grids(odd: Grid, even: Grid) -> Option<Self> {
        if !odd.intersection(even).is_empty() {
            return None;
        }
        Some(Self { odd, even })
    }

    pub fn grid(&self, player: Player) -> Grid {
        match player {
            Player::Odd => self.odd,
            Player::Even => self.even,
        }
    }

    /// Every occupied cell
    pub fn combined(&self) -> Grid {
        self.odd.union(self.even)
    }

    pub fn occupant(&self, pos: Position) -> Option<Player> {
        if self.odd.contains(pos) {
            Some(Player::Odd)
        } else if self.even.contains(pos) {
            Some(Player::Even)
        } else {
            None
        }
    }

    /// Where a piece dropped into `column` would land
    pub fn drop_target(&self, column: usize) -> Option<Position> {
        self.combined().drop_target(column)
    }

    /// Places a piece for `player`; the caller must have obtained `pos` from
    /// `drop_target`
    pub fn apply(&mut self, player: Player, pos: Position) {
        debug_assert!(self.occupant(pos).is_none(), "{} is already occupied", pos);
        match player {
            Player::Odd => self.odd.insert(pos),
            Player::Even => self.even.insert(pos),
        };
    }

    pub fn piece_count(&self) -> usize {
        self.combined().len()
    }

    pub fn is_full(&self) -> bool {
        self.piece_count() == MAX_MOVES
    }
}

impl Index<Position> for Board {
    type Output = Option<Player>;

    fn index(&self, pos: Position) -> &Option<Player> {
        match self.occupant(pos) {
            Some(Player::Odd) => &Some(Player::Odd),
            Some(Player::Even) => &Some(Player::Even),
            None => &None,
        }
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        parse_cells(text, |pos, glyph| {
            if glyph == Player::Odd.glyph() {
                board.odd.insert(pos);
            } else if glyph == Player::Even.glyph() {
                board.even.insert(pos);
            } else if glyph != EMPTY_GLYPH {
                return Err(ParseError::UnknownGlyph { glyph });
            }
            Ok(())
        })?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_cells(f, |pos| {
            self.occupant(pos)
                .map(Player::glyph)
                .unwrap_or(EMPTY_GLYPH)
        })
    }
}
