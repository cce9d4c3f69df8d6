//! Move validation: bounds and occupancy.

use super::super::{Board, Move, MoveError};
use tracing::instrument;

/// Resolves a candidate move to the cell it would occupy.
///
/// Cell moves target themselves. Column moves target the lowest empty row of
/// the column. The board is not modified.
///
/// # Errors
///
/// - [`MoveError::WrongShape`] if the move kind does not match the variant.
/// - [`MoveError::OutOfRange`] if the row or column is off the board.
/// - [`MoveError::CellOccupied`] if the cell is taken or the column is full.
#[instrument(skip(board))]
pub fn resolve(board: &Board, mv: Move) -> Result<(usize, usize), MoveError> {
    let gravity = board.variant().gravity();

    match mv {
        Move::Cell { row, col } => {
            if gravity {
                return Err(MoveError::WrongShape(mv));
            }
            if !board.variant().contains(row, col) {
                return Err(MoveError::OutOfRange(mv));
            }
            if !board.is_empty(row, col) {
                return Err(MoveError::CellOccupied(mv));
            }
            Ok((row, col))
        }
        Move::Column(col) => {
            if !gravity {
                return Err(MoveError::WrongShape(mv));
            }
            if col >= board.cols() {
                return Err(MoveError::OutOfRange(mv));
            }
            board
                .lowest_empty_row(col)
                .map(|row| (row, col))
                .ok_or(MoveError::CellOccupied(mv))
        }
    }
}

/// Returns true if `mv` can be played on `board`.
pub fn is_valid(board: &Board, mv: Move) -> bool {
    resolve(board, mv).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Variant};

    #[test]
    fn test_cell_in_range() {
        let board = Board::new(Variant::TIC_TAC_TOE);
        assert_eq!(resolve(&board, Move::Cell { row: 2, col: 1 }), Ok((2, 1)));
    }

    #[test]
    fn test_cell_out_of_range() {
        let board = Board::new(Variant::TIC_TAC_TOE);
        let mv = Move::Cell { row: 3, col: 0 };
        assert_eq!(resolve(&board, mv), Err(MoveError::OutOfRange(mv)));
        assert!(!is_valid(&board, Move::Cell { row: 0, col: 3 }));
    }

    #[test]
    fn test_cell_occupied() {
        let mut board = Board::new(Variant::TIC_TAC_TOE);
        board.place(1, 1, Player::X);
        let mv = Move::Cell { row: 1, col: 1 };
        assert_eq!(resolve(&board, mv), Err(MoveError::CellOccupied(mv)));
    }

    #[test]
    fn test_column_resolves_lowest_row() {
        let mut board = Board::new(Variant::CONNECT_FOUR);
        assert_eq!(resolve(&board, Move::Column(2)), Ok((0, 2)));
        board.place(0, 2, Player::X);
        assert_eq!(resolve(&board, Move::Column(2)), Ok((1, 2)));
    }

    #[test]
    fn test_column_out_of_range() {
        let board = Board::new(Variant::CONNECT_FOUR);
        assert_eq!(
            resolve(&board, Move::Column(7)),
            Err(MoveError::OutOfRange(Move::Column(7)))
        );
    }

    #[test]
    fn test_full_column_rejected() {
        let mut board = Board::new(Variant::CONNECT_FOUR);
        for row in 0..6 {
            board.place(row, 0, Player::O);
        }
        assert_eq!(
            resolve(&board, Move::Column(0)),
            Err(MoveError::CellOccupied(Move::Column(0)))
        );
    }

    #[test]
    fn test_wrong_shape() {
        let ttt = Board::new(Variant::TIC_TAC_TOE);
        let c4 = Board::new(Variant::CONNECT_FOUR);
        assert_eq!(
            resolve(&ttt, Move::Column(0)),
            Err(MoveError::WrongShape(Move::Column(0)))
        );
        assert!(!is_valid(&c4, Move::Cell { row: 0, col: 0 }));
    }
}
