//! Rules engine for the board game 'Connect 4'
//!
//! Boards are stored as a pair of bit-packed grids, one per player, so that
//! gravity and four-in-a-row detection are a handful of word operations.
//! Every game keeps a compact script of its moves from which it can be
//! rebuilt at any time.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_model::{Game, GameState, Player};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut game = Game::new();
//! for &column in &[0, 6, 1, 6, 2, 6] {
//!     assert!(game.make_turn(column));
//! }
//! // the fourth piece in the bottom row wins for the first player
//! game.try_make_turn(3)?;
//!
//! assert!(matches!(game.state(), GameState::Win(Player::Odd, _)));
//! assert_eq!(game.winning_cells().map(|grid| grid.len()), Some(4));
//! assert!(!game.make_turn(4));
//!
//! // the script alone is enough to rebuild the game
//! let replayed = connect4_model::Game::from_script(game.script())?;
//! assert_eq!(replayed, game);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;

pub mod pos;

pub mod player;

pub mod grid;

pub mod board;

pub mod script;

pub mod game;

pub mod history;

pub mod error;


pub use board::Board;
pub use error::{MoveError, ParseError, ReplayError};
pub use game::{Game, GameState};
pub use grid::{Direction, Grid};
pub use history::History;
pub use player::Player;
pub use pos::Position;
pub use script::{Move, Script};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of bits reserved for each column in a grid word
pub const LANE_BITS: usize = 8;

/// The number of moves in a game that fills the board
pub const MAX_MOVES: usize = WIDTH * HEIGHT;

/// The number of base-8 move digits that fit in one script word
pub const DIGITS_PER_WORD: usize = 64 / 3;

// every column lane must fit in a u64 and keep at least one guard bit
const_assert!(WIDTH * LANE_BITS <= 64);
const_assert!(HEIGHT < LANE_BITS);
// two script words hold a full game
const_assert!(MAX_MOVES <= 2 * DIGITS_PER_WORD);
