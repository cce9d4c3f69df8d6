//! Core domain types shared by both board variants.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(strum::Display, strum::EnumIter)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark this player leaves on the board.
    pub fn mark(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns true if no player has claimed this cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Occupied(player) => Some(player),
            Cell::Empty => None,
        }
    }
}

/// Board geometry and rules for one of the supported games.
///
/// Only the two shipped variants exist; there is no public constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Variant {
    name: &'static str,
    rows: usize,
    cols: usize,
    run_length: usize,
    gravity: bool,
}

impl Variant {
    /// 3x3 tic-tac-toe, three in a row wins.
    pub const TIC_TAC_TOE: Variant = Variant {
        name: "Tic-Tac-Toe",
        rows: 3,
        cols: 3,
        run_length: 3,
        gravity: false,
    };

    /// 6x7 connect four, tokens drop to the lowest empty row, four in a row wins.
    pub const CONNECT_FOUR: Variant = Variant {
        name: "Connect Four",
        rows: 6,
        cols: 7,
        run_length: 4,
        gravity: true,
    };

    /// Human-readable name of the game.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Length of the run that wins the game.
    pub fn run_length(&self) -> usize {
        self.run_length
    }

    /// Whether moves name a column and fall to the lowest empty row.
    pub fn gravity(&self) -> bool {
        self.gravity
    }

    /// Returns true if `(row, col)` lies on a board of this variant.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
