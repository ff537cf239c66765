//! Error types for move handling and snapshot parsing

/// Why a move was rejected. A rejected move never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} out of range, columns must be between 0 and 6")]
    ColumnOutOfRange { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is over")]
    GameOver,
}

/// Errors produced when reading grids, boards or move strings from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected 6 rows, found {found}")]
    RowCount { found: usize },

    #[error("expected 7 cells in row {row}, found {found}")]
    ColumnCount { row: usize, found: usize },

    #[error("unknown cell glyph '{glyph}'")]
    UnknownGlyph { glyph: char },

    #[error("could not parse '{glyph}' as a valid move")]
    InvalidMove { glyph: char },

    #[error("a script holds at most 42 moves")]
    TooManyMoves,

    #[error("both players occupy the same cell")]
    Overlap,
}

/// A recorded move that could not be replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("move {number} could not be replayed: {source}")]
pub struct ReplayError {
    /// 1-based number of the offending move
    pub number: usize,
    pub source: MoveError,
}
