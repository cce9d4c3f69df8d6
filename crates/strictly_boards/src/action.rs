//! First-class move types.
//!
//! A [`Move`] is the player's intent as delivered by the input layer. Once the
//! validator resolves it to a concrete cell and the board accepts it, it is
//! recorded as a [`Placement`].

use super::Player;
use serde::{Deserialize, Serialize};

/// A candidate move, well-formed but not yet validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Claim a specific cell (non-gravity variants).
    Cell {
        /// Target row.
        row: usize,
        /// Target column.
        col: usize,
    },
    /// Drop a token into a column (gravity variants).
    Column(usize),
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Cell { row, col } => write!(f, "({row}, {col})"),
            Move::Column(col) => write!(f, "column {col}"),
        }
    }
}

/// An accepted move: who played and where the mark landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// The player who moved.
    pub player: Player,
    /// Row the mark landed in.
    pub row: usize,
    /// Column the mark landed in.
    pub col: usize,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(player: Player, row: usize, col: usize) -> Self {
        Self { player, row, col }
    }
}

/// Reason a candidate move was rejected.
///
/// Every rejection leaves the match untouched and the same player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Coordinates or column outside the board.
    #[display("{_0} is outside the board")]
    OutOfRange(#[error(not(source))] Move),

    /// Target cell (or the top of the target column) already holds a mark.
    #[display("{_0} is already occupied")]
    CellOccupied(#[error(not(source))] Move),

    /// A column move on a cell-addressed board, or the reverse.
    #[display("{_0} does not fit this board")]
    WrongShape(#[error(not(source))] Move),

    /// The match has already ended.
    #[display("Game is already over")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        assert_eq!(Move::Cell { row: 1, col: 2 }.to_string(), "(1, 2)");
        assert_eq!(Move::Column(4).to_string(), "column 4");
    }

    #[test]
    fn test_error_display() {
        let err = MoveError::CellOccupied(Move::Cell { row: 0, col: 0 });
        assert_eq!(err.to_string(), "(0, 0) is already occupied");
        assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
    }
}
