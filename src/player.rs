use std::fmt;

/// One of the two players.
///
/// `Odd` plays the odd-numbered moves (1st, 3rd, ...) and therefore starts
/// every game; `Even` answers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    Odd,
    Even,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::Odd => Player::Even,
            Player::Even => Player::Odd,
        }
    }

    /// The player who makes move `number` (1-based)
    pub fn for_move(number: usize) -> Player {
        if number % 2 == 1 {
            Player::Odd
        } else {
            Player::Even
        }
    }

    /// The glyph used for this player's pieces in board snapshots
    pub fn glyph(self) -> char {
        match self {
            Player::Odd => '🟡',
            Player::Even => '🔴',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
