//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Match, MatchState, Player};
use super::Invariant;

/// Invariant: players alternate turns.
///
/// History starts with X and never repeats a player twice in a row. While the
/// match is running, the player to move is the one the alternation predicts.
pub struct AlternatingTurnInvariant;

impl Invariant<Match> for AlternatingTurnInvariant {
    fn holds(game: &Match) -> bool {
        let history = game.history();

        if history.first().is_some_and(|first| first.player != Player::X) {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        match game.state() {
            MatchState::AwaitingMove(player) => {
                let expected = if history.len() % 2 == 0 {
                    Player::X
                } else {
                    Player::O
                };
                player == expected
            }
            // The winner is whoever moved last
            MatchState::Won(winner) => history.last().is_some_and(|last| last.player == winner),
            MatchState::Drawn => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
