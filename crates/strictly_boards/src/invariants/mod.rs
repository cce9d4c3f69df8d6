//! First-class invariants for a match.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. The turn controller checks them in debug builds; they can also be
//! tested on their own.

pub mod alternating_turn;
pub mod gravity;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use gravity::GravityInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for 2- and 3-tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(checks: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

/// All match invariants as a composable set.
pub type MatchInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    GravityInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Match, Move, Player};

    #[test]
    fn test_invariant_set_holds_for_empty_match() {
        assert!(MatchInvariants::check_all(&Match::tic_tac_toe()).is_ok());
        assert!(MatchInvariants::check_all(&Match::connect_four()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = Match::connect_four();
        for col in [3, 3, 4, 2, 6] {
            game.submit(Move::Column(col)).unwrap();
        }
        assert!(MatchInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = Match::connect_four();
        game.submit(Move::Column(0)).unwrap();

        // A floating O that no move put there
        game.board.place(3, 5, Player::O);

        let violations = MatchInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(game.board.get(3, 5), Ok(Cell::Occupied(Player::O)));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&Match::tic_tac_toe()).is_ok());
    }
}
