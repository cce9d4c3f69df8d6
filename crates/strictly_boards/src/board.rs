//! Grid storage for both variants.

use super::types::{Cell, Player, Variant};
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{instrument, warn};

/// Error returned when a coordinate falls outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Coordinates outside the board dimensions.
    #[display("Cell ({row}, {col}) is outside the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// Fixed-size grid of cells.
///
/// Cells are stored in row-major order. For gravity variants row 0 is the
/// bottom of the column. A cell that leaves [`Cell::Empty`] never changes
/// again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    variant: Variant,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board sized for `variant`.
    #[instrument]
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            cells: vec![Cell::Empty; variant.rows() * variant.cols()],
        }
    }

    /// Returns the variant this board was sized for.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.variant.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.variant.cols()
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        self.variant
            .contains(row, col)
            .then(|| row * self.variant.cols() + col)
    }

    /// Gets the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] if the indices fall outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.index(row, col)
            .map(|idx| self.cells[idx])
            .ok_or(BoardError::OutOfRange { row, col })
    }

    /// Returns true if `(row, col)` is on the board and empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Ok(Cell::Empty))
    }

    /// Writes `player` into `(row, col)` if that cell is currently empty.
    ///
    /// Returns `false` without touching the board when the cell is occupied
    /// or outside the grid.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> bool {
        let Some(idx) = self.index(row, col) else {
            warn!(row, col, "Placement outside the board");
            return false;
        };

        if !self.cells[idx].is_empty() {
            return false;
        }

        self.cells[idx] = Cell::Occupied(player);
        true
    }

    /// Lowest empty row of `col`, or `None` if the column is full or off the board.
    #[instrument(skip(self))]
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        (0..self.rows()).find(|&row| self.is_empty(row, col))
    }

    /// Returns true if the top cell of `col` is occupied.
    ///
    /// Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        !self.is_empty(self.rows() - 1, col)
    }

    /// Checks if no reachable empty cell remains.
    ///
    /// Gravity boards fill from the bottom, so only the top row is inspected.
    #[instrument(skip(self))]
    pub fn is_full(&self) -> bool {
        if self.variant.gravity() {
            (0..self.cols()).all(|col| self.is_column_full(col))
        } else {
            self.cells.iter().all(|cell| !cell.is_empty())
        }
    }

    /// Cells a player could target next, for display.
    ///
    /// Non-gravity boards list every empty cell in row-major order. Gravity
    /// boards list the lowest empty cell of each non-full column.
    #[instrument(skip(self))]
    pub fn playable_cells(&self) -> Vec<(usize, usize)> {
        if self.variant.gravity() {
            (0..self.cols())
                .filter_map(|col| self.lowest_empty_row(col).map(|row| (row, col)))
                .collect()
        } else {
            (0..self.rows())
                .flat_map(|row| (0..self.cols()).map(move |col| (row, col)))
                .filter(|&(row, col)| self.is_empty(row, col))
                .collect()
        }
    }

    /// All cells in row-major order (row 0 first).
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}
