//! The game state machine driven by the front end

use log::{debug, info, trace};

use crate::{
    board::Board,
    error::{MoveError, ReplayError},
    grid::Grid,
    player::Player,
    pos::Position,
    script::Script,
    WIDTH,
};

/// Whose turn it is, or how the game ended
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum GameState {
    Turn(Player),
    /// The winner and the cells of their four in a row
    Win(Player, Grid),
    Draw,
}

/// A game of Connect 4: the board, the moves that led to it, and whose turn
/// it is.
///
/// `Game` is a plain value. Front ends that want undo keep earlier copies
/// around and restore them wholesale, see [`History`](crate::History).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Game {
    state: GameState,
    board: Board,
    script: Script,
}

impl Game {
    pub fn new() -> Self {
        Self {
            state: GameState::Turn(Player::Odd),
            board: Board::new(),
            script: Script::new(),
        }
    }

    /// Rebuilds a game by replaying every move of `script` from an empty board
    pub fn from_script(script: &Script) -> Result<Self, ReplayError> {
        let mut game = Self::new();
        for step in script {
            trace!("replaying move {} in column {}", step.number, step.column);
            game.try_make_turn(step.column)
                .map_err(|source| ReplayError {
                    number: step.number,
                    source,
                })?;
        }
        Ok(game)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    /// The player to move, or `None` once the game is over
    pub fn current_player(&self) -> Option<Player> {
        match self.state {
            GameState::Turn(player) => {
                debug_assert_eq!(player, self.script.next_player());
                Some(player)
            }
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.current_player().is_none()
    }

    /// The cells of the winning four in a row, if the game has been won
    pub fn winning_cells(&self) -> Option<Grid> {
        match self.state {
            GameState::Win(_, grid) => Some(grid),
            _ => None,
        }
    }

    /// Drops a piece for the current player into `column`.
    ///
    /// Returns `false` and leaves the game untouched if the column is out of
    /// range or full, or the game is over.
    pub fn make_turn(&mut self, column: usize) -> bool {
        self.try_make_turn(column).is_ok()
    }

    /// Drops a piece for the current player into `column`, returning where it
    /// landed.
    pub fn try_make_turn(&mut self, column: usize) -> Result<Position, MoveError> {
        let result = self.play(column);
        if let Err(err) = &result {
            debug!("rejected move in column {}: {}", column, err);
        }
        result
    }

    fn play(&mut self, column: usize) -> Result<Position, MoveError> {
        let player = self.current_player().ok_or(MoveError::GameOver)?;
        if column >= WIDTH {
            return Err(MoveError::ColumnOutOfRange { column });
        }
        let pos = self
            .board
            .drop_target(column)
            .ok_or(MoveError::ColumnFull { column })?;

        self.script.append(column);
        self.board.apply(player, pos);
        debug!("move {}: {} to {}", self.script.len(), player, pos);

        self.state = if let Some(fours) = self.board.grid(player).find_fours() {
            info!("{} wins with {}", player, fours.short_description());
            GameState::Win(player, fours)
        } else if self.board.is_full() {
            info!("the game is drawn");
            GameState::Draw
        } else {
            GameState::Turn(player.other())
        };
        Ok(pos)
    }

    /// Takes back the most recent move, returning its column.
    ///
    /// The game is rebuilt from the shortened script rather than by undoing
    /// the move on the board.
    pub fn take_back(&mut self) -> Option<usize> {
        let mut script = self.script;
        let column = script.pop()?;
        // a prefix of an accepted game always replays
        *self = Self::from_script(&script).ok()?;
        Some(column)
    }

    /// Starts over with an empty board
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
