//! Turn controller.
//!
//! A [`Match`] owns one board and drives the request, validate, apply, check
//! loop. It is a plain state machine:
//!
//! - `AwaitingMove(p)` + valid move → `Won(p)`, `Drawn`, or `AwaitingMove(p.opponent())`
//! - `AwaitingMove(p)` + invalid move → unchanged, error returned
//! - `Won` and `Drawn` are terminal
//!
//! A rematch is a new `Match`; nothing carries over.

use super::invariants::{InvariantSet, MatchInvariants};
use super::rules::{self, Outcome};
use super::snapshot::Snapshot;
use super::{Board, Move, MoveError, Placement, Player, Variant};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchState {
    /// Waiting for the given player to move.
    AwaitingMove(Player),
    /// The given player completed a run.
    Won(Player),
    /// The board filled with no winner.
    Drawn,
}

impl MatchState {
    /// Returns true for `Won` and `Drawn`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MatchState::AwaitingMove(_))
    }

    /// The outcome this state represents.
    pub fn outcome(&self) -> Outcome {
        match *self {
            MatchState::AwaitingMove(_) => Outcome::Ongoing,
            MatchState::Won(player) => Outcome::Win(player),
            MatchState::Drawn => Outcome::Draw,
        }
    }
}

/// A single game from first move to win or draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub(crate) board: Board,
    pub(crate) state: MatchState,
    pub(crate) history: Vec<Placement>,
}

impl Match {
    /// Starts a fresh match; X always moves first.
    #[instrument]
    pub fn new(variant: Variant) -> Self {
        info!(variant = %variant, "Starting new match");
        Self {
            board: Board::new(variant),
            state: MatchState::AwaitingMove(Player::X),
            history: Vec::new(),
        }
    }

    /// Starts a fresh tic-tac-toe match.
    pub fn tic_tac_toe() -> Self {
        Self::new(Variant::TIC_TAC_TOE)
    }

    /// Starts a fresh connect four match.
    pub fn connect_four() -> Self {
        Self::new(Variant::CONNECT_FOUR)
    }

    /// Returns the variant being played.
    pub fn variant(&self) -> Variant {
        self.board.variant()
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Returns the player to move, or `None` once the match is over.
    pub fn to_move(&self) -> Option<Player> {
        match self.state {
            MatchState::AwaitingMove(player) => Some(player),
            MatchState::Won(_) | MatchState::Drawn => None,
        }
    }

    /// Returns true once the match reached `Won` or `Drawn`.
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Returns the outcome so far.
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Returns the most recent accepted move.
    pub fn last_placement(&self) -> Option<Placement> {
        self.history.last().copied()
    }

    /// Checks `mv` against the board without applying it.
    pub fn validate(&self, mv: Move) -> bool {
        !self.is_over() && rules::is_valid(&self.board, mv)
    }

    /// Applies a move for the player to move.
    ///
    /// On success the returned outcome reflects the new state. On error the
    /// match is unchanged and the same player is still to move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the match already ended.
    /// - Any rejection from [`rules::resolve`].
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn submit(&mut self, mv: Move) -> Result<Outcome, MoveError> {
        let MatchState::AwaitingMove(player) = self.state else {
            return Err(MoveError::GameOver);
        };

        let (row, col) = rules::resolve(&self.board, mv).inspect_err(|e| {
            debug!(%player, error = %e, "Move rejected");
        })?;

        // resolve() only yields empty cells
        let placed = self.board.place(row, col, player);
        debug_assert!(placed, "resolved cell ({row}, {col}) was not empty");
        self.history.push(Placement::new(player, row, col));
        debug!(%player, row, col, "Move accepted");

        let outcome = rules::check_outcome(&self.board, row, col, player);
        self.state = match outcome {
            Outcome::Win(winner) => {
                info!(%winner, moves = self.history.len(), "Match won");
                MatchState::Won(winner)
            }
            Outcome::Draw => {
                info!(moves = self.history.len(), "Match drawn");
                MatchState::Drawn
            }
            Outcome::Ongoing => MatchState::AwaitingMove(player.opponent()),
        };

        debug_assert!(
            MatchInvariants::check_all(self).is_ok(),
            "match invariants violated after {mv}"
        );

        Ok(outcome)
    }

    /// Captures everything the presentation layer needs to draw this match.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(self)
    }
}
