//! Gravity invariant: tokens rest on the bottom or on another token.

use super::super::Match;
use super::Invariant;

/// Invariant: on gravity boards no occupied cell sits above an empty one.
///
/// Trivially true for boards without gravity.
pub struct GravityInvariant;

impl Invariant<Match> for GravityInvariant {
    fn holds(game: &Match) -> bool {
        let board = game.board();
        if !game.variant().gravity() {
            return true;
        }

        (0..board.cols()).all(|col| {
            (1..board.rows()).all(|row| board.is_empty(row, col) || !board.is_empty(row - 1, col))
        })
    }

    fn description() -> &'static str {
        "Tokens rest on the bottom row or on another token"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player};

    #[test]
    fn test_stacked_column_holds() {
        let mut game = Match::connect_four();
        for _ in 0..4 {
            game.submit(Move::Column(2)).unwrap();
        }
        assert!(GravityInvariant::holds(&game));
    }

    #[test]
    fn test_floating_token_violates() {
        let mut game = Match::connect_four();
        game.board.place(2, 2, Player::X);
        assert!(!GravityInvariant::holds(&game));
    }

    #[test]
    fn test_tictactoe_ignores_gravity() {
        let mut game = Match::tic_tac_toe();
        game.submit(Move::Cell { row: 2, col: 2 }).unwrap();
        assert!(GravityInvariant::holds(&game));
    }
}
