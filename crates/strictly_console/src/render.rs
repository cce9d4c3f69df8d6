//! ASCII rendering of boards and hints.

use crate::input::column_letter;
use strictly_boards::{Cell, Player, Snapshot, Variant};

fn mark(cell: Option<Cell>) -> char {
    cell.and_then(Cell::player).map_or(' ', Player::mark)
}

fn cells_line(snapshot: &Snapshot, row: usize) -> String {
    (0..snapshot.variant().cols())
        .map(|col| mark(snapshot.cell(row, col)).to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Draws the board with row and column labels, followed by a blank line.
///
/// Cell-addressed boards print row 0 at the top with numeric labels. Gravity
/// boards print the top row first, rows numbered from 1 at the bottom and
/// columns lettered.
pub fn render_board(snapshot: &Snapshot) -> String {
    let variant = snapshot.variant();
    let mut out = String::new();

    if variant.gravity() {
        let rule = "-".repeat(4 + 4 * variant.cols());
        for row in (0..variant.rows()).rev() {
            out.push_str(&format!("  {} | {} |\n", row + 1, cells_line(snapshot, row)));
            out.push_str(&rule);
            out.push('\n');
        }
        let letters = (0..variant.cols())
            .map(|col| column_letter(col).to_string())
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str(&format!("|R/C| {letters} |\n"));
        out.push_str(&rule);
        out.push('\n');
    } else {
        let rule = "-".repeat(5 + 4 * variant.cols());
        let numbers = (0..variant.cols())
            .map(|col| col.to_string())
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str(&format!("{rule}\n|R\\C| {numbers} |\n{rule}\n"));
        for row in 0..variant.rows() {
            out.push_str(&format!("| {row} | {} |\n{rule}\n", cells_line(snapshot, row)));
        }
    }

    out.push('\n');
    out
}

/// Label a player would type for `(row, col)`: `a1` style on gravity boards,
/// `row,col` otherwise.
pub fn cell_label(variant: Variant, row: usize, col: usize) -> String {
    if variant.gravity() {
        format!("{}{}", column_letter(col), row + 1)
    } else {
        format!("{row},{col}")
    }
}

/// Comma-separated labels of the playable cells.
pub fn playable_hint(snapshot: &Snapshot) -> String {
    snapshot
        .playable()
        .iter()
        .map(|&(row, col)| cell_label(*snapshot.variant(), row, col))
        .collect::<Vec<_>>()
        .join(", ")
}
