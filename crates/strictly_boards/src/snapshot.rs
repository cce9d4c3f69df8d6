//! Read-only view of a match for the presentation layer.

use super::game::{Match, MatchState};
use super::{Cell, Placement, Player, Variant};
use derive_getters::Getters;
use serde::Serialize;

/// Everything needed to draw a match after a move.
///
/// Derived from the match on demand; changing it has no effect on play.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Snapshot {
    /// Game being played.
    variant: Variant,
    /// Cells in row-major order, row 0 first.
    cells: Vec<Cell>,
    /// Current phase.
    state: MatchState,
    /// Most recent accepted move.
    last: Option<Placement>,
    /// Cells that can be targeted next, for hints.
    playable: Vec<(usize, usize)>,
}

impl Snapshot {
    pub(crate) fn of(game: &Match) -> Self {
        let playable = if game.is_over() {
            Vec::new()
        } else {
            game.board().playable_cells()
        };

        Self {
            variant: game.variant(),
            cells: game.board().cells().to_vec(),
            state: game.state(),
            last: game.last_placement(),
            playable,
        }
    }

    /// Cell at `(row, col)`, or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.variant
            .contains(row, col)
            .then(|| self.cells[row * self.variant.cols() + col])
    }
}
