//! Monotonic board invariant: cells never change once set.

use super::super::{Board, Match};
use super::Invariant;

/// Invariant: board cells are monotonic (never overwritten).
///
/// Replaying the move history onto a fresh board, where every target must
/// still be empty, reproduces the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<Match> for MonotonicBoardInvariant {
    fn holds(game: &Match) -> bool {
        let mut reconstructed = Board::new(game.variant());

        for placement in game.history() {
            if !reconstructed.place(placement.row, placement.col, placement.player) {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Placement, Player};

    #[test]
    fn test_empty_match_holds() {
        assert!(MonotonicBoardInvariant::holds(&Match::tic_tac_toe()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut game = Match::tic_tac_toe();
        for (row, col) in [(0, 0), (1, 1), (0, 2), (2, 0)] {
            game.submit(Move::Cell { row, col }).unwrap();
        }
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_duplicate_history_entry_violates() {
        let mut game = Match::tic_tac_toe();
        game.submit(Move::Cell { row: 1, col: 1 }).unwrap();

        // Recorded twice, as if the cell had been overwritten
        game.history.push(Placement::new(Player::O, 1, 1));

        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
