//! Win detection.
//!
//! [`check_outcome`] scans outward from the cell just placed along the four
//! axes, so its cost depends only on the run length, never on the board size.
//! [`scan_winner`] rescans every cell and exists to cross-check it.

use super::super::{Board, Cell, Player};
use super::Outcome;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// The four axes a run can lie on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Direction {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
    /// Rows and columns increasing together.
    Diagonal,
    /// Rows increasing while columns decrease.
    AntiDiagonal,
}

impl Direction {
    /// Row and column step for the positive sense of this axis.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// Counts consecutive `player` cells stepping from `(row, col)` by `(dr, dc)`,
/// not counting the start cell.
fn walk(board: &Board, row: usize, col: usize, (dr, dc): (isize, isize), player: Player) -> usize {
    let mut count = 0;
    let (mut r, mut c) = (row, col);
    loop {
        let next = r.checked_add_signed(dr).zip(c.checked_add_signed(dc));
        match next {
            Some((nr, nc)) if board.get(nr, nc) == Ok(Cell::Occupied(player)) => {
                count += 1;
                r = nr;
                c = nc;
            }
            _ => return count,
        }
    }
}

/// Length of the `player` run through `(row, col)` along `direction`.
///
/// The start cell counts as one regardless of its contents, matching the
/// moment right after a placement.
pub fn run_length_through(
    board: &Board,
    row: usize,
    col: usize,
    direction: Direction,
    player: Player,
) -> usize {
    let (dr, dc) = direction.delta();
    1 + walk(board, row, col, (dr, dc), player) + walk(board, row, col, (-dr, -dc), player)
}

/// Determines the outcome after `player` placed a mark at `(row, col)`.
///
/// Reports a single [`Outcome::Win`] as soon as any axis reaches the run
/// length, even if the move completed several runs. Without a win the result
/// is [`Outcome::Draw`] when the board is full, otherwise [`Outcome::Ongoing`].
#[instrument(skip(board))]
pub fn check_outcome(board: &Board, row: usize, col: usize, player: Player) -> Outcome {
    let needed = board.variant().run_length();

    for direction in Direction::iter() {
        let run = run_length_through(board, row, col, direction, player);
        if run >= needed {
            debug!(?direction, run, "Winning run");
            return Outcome::Win(player);
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

/// Scans the whole board for any completed run.
///
/// Returns the owner of the first run found in row-major order.
#[instrument(skip(board))]
pub fn scan_winner(board: &Board) -> Option<Player> {
    let needed = board.variant().run_length();

    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let Ok(Cell::Occupied(player)) = board.get(row, col) else {
                continue;
            };
            for direction in Direction::iter() {
                let (dr, dc) = direction.delta();
                if 1 + walk(board, row, col, (dr, dc), player) >= needed {
                    return Some(player);
                }
            }
        }
    }

    None
}
