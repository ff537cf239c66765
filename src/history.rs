use log::debug;

use crate::{error::MoveError, game::Game, pos::Position};

/// Undo and redo over whole-game snapshots.
///
/// Every change to the current game pushes the previous value onto the undo
/// stack; undoing swaps whole values back in instead of reversing moves.
#[derive(Clone, Debug, Default)]
pub struct History {
    current: Game,
    undo: Vec<Game>,
    redo: Vec<Game>,
}

impl History {
    pub fn new(game: Game) -> Self {
        Self {
            current: game,
            undo: Vec::new(),
            redo: Vec::new(),
        }
    }

    pub fn current(&self) -> &Game {
        &self.current
    }

    /// Plays `column` in the current game, recording a snapshot if the move
    /// is accepted
    pub fn make_turn(&mut self, column: usize) -> bool {
        self.try_make_turn(column).is_ok()
    }

    pub fn try_make_turn(&mut self, column: usize) -> Result<Position, MoveError> {
        let previous = self.current;
        let pos = self.current.try_make_turn(column)?;
        self.record(previous);
        Ok(pos)
    }

    /// Starts a new game; a no-op on a game that has not started
    pub fn reset(&mut self) {
        if self.current == Game::new() {
            return;
        }
        self.restore(Game::new());
    }

    /// Replaces the current game with `game`
    pub fn restore(&mut self, game: Game) {
        let previous = std::mem::replace(&mut self.current, game);
        self.record(previous);
    }

    fn record(&mut self, previous: Game) {
        self.undo.push(previous);
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo(&mut self) -> bool {
        match self.undo.pop() {
            Some(game) => {
                let undone = std::mem::replace(&mut self.current, game);
                self.redo.push(undone);
                debug!("undo, {} snapshots left", self.undo.len());
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(game) => {
                let redone = std::mem::replace(&mut self.current, game);
                self.undo.push(redone);
                debug!("redo, {} snapshots left", self.redo.len());
                true
            }
            None => false,
        }
    }
}
