//! Strictly Boards - engine for two-player grid games
//!
//! Pure game logic for tic-tac-toe and connect four. The crate performs no
//! I/O: callers hand it structured moves and read back board snapshots.
//!
//! # Architecture
//!
//! - **Board**: fixed grid of cells, write-if-empty placement
//! - **Rules**: move validation, outward-scan win detection, draw detection
//! - **Match**: turn controller state machine owning one board
//! - **Invariants**: properties checked after every accepted move
//!
//! # Example
//!
//! ```
//! use strictly_boards::{Match, MatchState, Move, Player};
//!
//! let mut game = Match::tic_tac_toe();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     game.submit(Move::Cell { row, col }).unwrap();
//! }
//! assert_eq!(game.state(), MatchState::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod game;
mod snapshot;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError, Placement};
pub use board::{Board, BoardError};
pub use game::{Match, MatchState};
pub use rules::Outcome;
pub use snapshot::Snapshot;
pub use types::{Cell, Player, Variant};
