//! Compact record of the moves of a game
//!
//! Each move is stored as the octal digit `column + 1`, so a zero digit never
//! denotes a move. The first 21 moves fill the first word, oldest move in the
//! most significant digit; the remaining moves fill the second word the same
//! way.

use std::fmt;
use std::str::FromStr;

use crate::{error::ParseError, player::Player, DIGITS_PER_WORD, MAX_MOVES, WIDTH};

/// The moves of a game, oldest first.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Script {
    words: [u64; 2],
}

/// One recorded move
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Move {
    /// 1-based position of the move in the game
    pub number: usize,
    pub column: usize,
}

impl Move {
    pub fn player(&self) -> Player {
        Player::for_move(self.number)
    }
}

fn digit_count(word: u64) -> usize {
    (64 - word.leading_zeros() as usize + 2) / 3
}

fn word_is_valid(word: u64) -> bool {
    digit_count(word) <= DIGITS_PER_WORD
        && (0..digit_count(word)).all(|digit| (word >> (3 * digit)) & 0o7 != 0)
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps raw script words, rejecting words that hold a zero digit, too
    /// many digits, or a second word before the first is full.
    pub fn from_words(first: u64, second: u64) -> Option<Self> {
        if !word_is_valid(first) || !word_is_valid(second) {
            return None;
        }
        if second != 0 && digit_count(first) != DIGITS_PER_WORD {
            return None;
        }
        Some(Self {
            words: [first, second],
        })
    }

    pub fn words(&self) -> (u64, u64) {
        (self.words[0], self.words[1])
    }

    pub fn len(&self) -> usize {
        if self.words[1] == 0 {
            digit_count(self.words[0])
        } else {
            DIGITS_PER_WORD + digit_count(self.words[1])
        }
    }

    pub fn is_empty(&self) -> bool {
        self.words[0] == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == MAX_MOVES
    }

    /// The player who makes the next move
    pub fn next_player(&self) -> Player {
        Player::for_move(self.len() + 1)
    }

    /// Records a move in `column`.
    ///
    /// # Panics
    /// Panics if the script already holds a full game or `column` is not on
    /// the board.
    pub fn append(&mut self, column: usize) {
        assert!(!self.is_full(), "a script holds at most {} moves", MAX_MOVES);
        assert!(column < WIDTH, "column {} out of range", column);

        let word = if digit_count(self.words[0]) == DIGITS_PER_WORD {
            &mut self.words[1]
        } else {
            &mut self.words[0]
        };
        *word = (*word << 3) | (column as u64 + 1);
    }

    /// Removes the most recent move and returns its column
    pub fn pop(&mut self) -> Option<usize> {
        let word = if self.words[1] != 0 {
            &mut self.words[1]
        } else if self.words[0] != 0 {
            &mut self.words[0]
        } else {
            return None;
        };
        let column = (*word & 0o7) as usize - 1;
        *word >>= 3;
        Some(column)
    }

    /// The column of the move at `index` (0-based)
    pub fn get(&self, index: usize) -> Option<usize> {
        if index >= self.len() {
            return None;
        }
        let (word, index) = if index < DIGITS_PER_WORD {
            (self.words[0], index)
        } else {
            (self.words[1], index - DIGITS_PER_WORD)
        };
        let shift = 3 * (digit_count(word) - 1 - index);
        Some(((word >> shift) & 0o7) as usize - 1)
    }

    pub fn iter(&self) -> ScriptIter {
        ScriptIter {
            script: *self,
            index: 0,
        }
    }
}

/// Replays a script oldest move first
#[derive(Clone, Debug)]
pub struct ScriptIter {
    script: Script,
    index: usize,
}

impl Iterator for ScriptIter {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        let column = self.script.get(self.index)?;
        self.index += 1;
        Some(Move {
            number: self.index,
            column,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.script.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScriptIter {}

impl<'a> IntoIterator for &'a Script {
    type Item = Move;
    type IntoIter = ScriptIter;

    fn into_iter(self) -> ScriptIter {
        self.iter()
    }
}

/// Parses a move string such as `"4453"`: one digit per move, columns
/// numbered from 1
impl FromStr for Script {
    type Err = ParseError;

    fn from_str(moves: &str) -> Result<Self, Self::Err> {
        let mut script = Script::new();
        for glyph in moves.trim().chars() {
            match glyph.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    if script.is_full() {
                        return Err(ParseError::TooManyMoves);
                    }
                    script.append(column - 1);
                }
                _ => return Err(ParseError::InvalidMove { glyph }),
            }
        }
        Ok(script)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in self {
            write!(f, "{}", step.column + 1)?;
        }
        Ok(())
    }
}
