//! Draw detection.

use super::super::Board;
use super::win::scan_winner;
use tracing::instrument;

/// Checks if the board is a finished draw: full, with no run anywhere.
///
/// The turn controller never calls this; it already knows whether the last
/// move won. This whole-board form is for inspecting arbitrary positions.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && scan_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Variant};

    fn fill(board: &mut Board, rows: &[&str]) {
        for (row, line) in rows.iter().enumerate() {
            for (col, mark) in line.chars().enumerate() {
                let player = if mark == 'X' { Player::X } else { Player::O };
                board.place(row, col, player);
            }
        }
    }

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new(Variant::TIC_TAC_TOE)));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new(Variant::TIC_TAC_TOE);
        fill(&mut board, &["XOX", "OXX", "OXO"]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new(Variant::TIC_TAC_TOE);
        fill(&mut board, &["XXX", "OOX", "XOO"]);
        assert!(board.is_full());
        assert!(!is_draw(&board));
    }
}
