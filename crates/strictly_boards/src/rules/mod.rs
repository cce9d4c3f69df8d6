//! Game rules shared by both variants.
//!
//! Pure functions over a [`Board`](crate::Board): move validation, win
//! detection and draw detection. Rules are kept apart from board storage and
//! from the turn controller so each can be tested on hand-built boards.

pub mod draw;
pub mod validate;
pub mod win;

pub use draw::is_draw;
pub use validate::{is_valid, resolve};
pub use win::{Direction, check_outcome, run_length_through, scan_winner};

use super::Player;
use serde::{Deserialize, Serialize};

/// Result of inspecting the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Play continues.
    Ongoing,
    /// The mover completed a run.
    Win(Player),
    /// The board is full and nobody won.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "Ongoing"),
            Outcome::Win(player) => write!(f, "Player {player} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
