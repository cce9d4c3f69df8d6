//! Parsing of typed moves and answers.
//!
//! Only well-formed text becomes a [`Move`]. Indices past the board edge are
//! still well-formed and are left for the engine to reject. Negative indices
//! can never name a cell, so they are reported here as out of range.

use derive_more::{Display, Error};
use strictly_boards::{Move, Variant};
use tracing::instrument;

/// Text that cannot be read as a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Wrong shape, non-numeric, or unknown column letter.
    #[display("Malformed input: {_0}")]
    Malformed(#[error(not(source))] String),

    /// Two integers, at least one of them negative.
    #[display("Cell ({row}, {col}) is outside the board")]
    OutOfRange {
        /// Row as typed.
        row: i64,
        /// Column as typed.
        col: i64,
    },
}

/// Letter naming a connect four column (`0` is `a`).
pub fn column_letter(col: usize) -> char {
    u8::try_from(col)
        .ok()
        .and_then(|offset| b'a'.checked_add(offset))
        .map(char::from)
        .unwrap_or('?')
}

/// Parses a move for `variant`.
///
/// # Errors
///
/// Returns [`InputError::Malformed`] if the text does not have the shape the
/// variant expects, or [`InputError::OutOfRange`] for negative indices.
#[instrument]
pub fn parse_move(variant: Variant, line: &str) -> Result<Move, InputError> {
    if variant.gravity() {
        parse_column(line, variant.cols())
    } else {
        parse_cell(line)
    }
}

/// Parses `"row,col"` into a cell move.
///
/// # Errors
///
/// Returns [`InputError::Malformed`] unless the text is exactly two integers
/// separated by a comma, and [`InputError::OutOfRange`] if either is negative.
pub fn parse_cell(line: &str) -> Result<Move, InputError> {
    let mut parts = line.trim().split(',');
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(InputError::Malformed(format!("expected row,col but got {line:?}")));
    };

    let number = |part: &str| {
        let part = part.trim();
        part.parse::<i64>().map_err(|_| {
            InputError::Malformed(format!("{part:?} is not a row or column number"))
        })
    };
    let (row, col) = (number(row)?, number(col)?);

    match (usize::try_from(row), usize::try_from(col)) {
        (Ok(row), Ok(col)) => Ok(Move::Cell { row, col }),
        _ => Err(InputError::OutOfRange { row, col }),
    }
}

/// Parses a column token such as `c` or `c3` into a column move.
///
/// The leading letter picks the column; anything after it is ignored since
/// the landing row is decided by gravity.
///
/// # Errors
///
/// Returns [`InputError::Malformed`] for empty input or a letter outside the
/// first `cols` letters of the alphabet.
pub fn parse_column(line: &str, cols: usize) -> Result<Move, InputError> {
    let Some(first) = line.trim().chars().next() else {
        return Err(InputError::Malformed("no column given".to_string()));
    };

    let letter = first.to_ascii_lowercase();
    (0..cols)
        .find(|&col| column_letter(col) == letter)
        .map(Move::Column)
        .ok_or_else(|| InputError::Malformed(format!("{first:?} is not a column letter")))
}

/// Reads a yes/no answer; only an initial `y` or `Y` means yes.
pub fn parse_rematch(line: &str) -> bool {
    line.trim().starts_with(['y', 'Y'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell("1,2"), Ok(Move::Cell { row: 1, col: 2 }));
        assert_eq!(parse_cell(" 0 , 0 \n"), Ok(Move::Cell { row: 0, col: 0 }));
    }

    #[test]
    fn test_parse_cell_keeps_out_of_range_numbers() {
        assert_eq!(parse_cell("3,7"), Ok(Move::Cell { row: 3, col: 7 }));
    }

    #[test]
    fn test_parse_cell_malformed() {
        for text in ["", "1", "1 2", "1,2,3", "a,b", "1.5,0", "1,"] {
            assert!(
                matches!(parse_cell(text), Err(InputError::Malformed(_))),
                "{text:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_parse_cell_negative_is_out_of_range() {
        assert_eq!(
            parse_cell("-1,0"),
            Err(InputError::OutOfRange { row: -1, col: 0 })
        );
        assert_eq!(
            parse_cell("2, -3"),
            Err(InputError::OutOfRange { row: 2, col: -3 })
        );
    }

    #[test]
    fn test_parse_column() {
        assert_eq!(parse_column("a1", 7), Ok(Move::Column(0)));
        assert_eq!(parse_column("C", 7), Ok(Move::Column(2)));
        assert_eq!(parse_column("  g6", 7), Ok(Move::Column(6)));
        assert_eq!(parse_column("d9", 7), Ok(Move::Column(3)));
    }

    #[test]
    fn test_parse_column_malformed() {
        assert!(parse_column("", 7).is_err());
        assert!(parse_column("h1", 7).is_err());
        assert!(parse_column("1a", 7).is_err());
    }

    #[test]
    fn test_parse_move_dispatches_on_variant() {
        assert_eq!(
            parse_move(Variant::CONNECT_FOUR, "b2"),
            Ok(Move::Column(1))
        );
        assert_eq!(
            parse_move(Variant::TIC_TAC_TOE, "2,1"),
            Ok(Move::Cell { row: 2, col: 1 })
        );
        assert!(parse_move(Variant::TIC_TAC_TOE, "b2").is_err());
    }

    #[test]
    fn test_parse_rematch() {
        assert!(parse_rematch("y"));
        assert!(parse_rematch(" Yes\n"));
        assert!(!parse_rematch("n"));
        assert!(!parse_rematch(""));
    }

    #[test]
    fn test_column_letter() {
        assert_eq!(column_letter(0), 'a');
        assert_eq!(column_letter(6), 'g');
    }
}
