//! Console session: one match after another until the players stop.
//!
//! The session is generic over its input and output so it can run against
//! stdin/stdout or in-memory buffers. Each round builds a fresh [`Match`];
//! a rematch never reuses anything from the previous one.

use crate::config::ConsoleConfig;
use crate::input::{self, InputError};
use crate::render;
use anyhow::{Context, Result};
use derive_getters::Getters;
use std::io::{BufRead, Write};
use strictly_boards::{Match, MatchState, Move, MoveError, Outcome, Player, Variant};
use tracing::{debug, info, instrument};

/// Tally of finished matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SessionSummary {
    /// Matches played to a win or draw.
    matches: u32,
    /// Matches won by X.
    x_wins: u32,
    /// Matches won by O.
    o_wins: u32,
    /// Drawn matches.
    draws: u32,
}

impl SessionSummary {
    fn record(&mut self, state: MatchState) {
        match state {
            MatchState::Won(Player::X) => self.x_wins += 1,
            MatchState::Won(Player::O) => self.o_wins += 1,
            MatchState::Drawn => self.draws += 1,
            MatchState::AwaitingMove(_) => return,
        }
        self.matches += 1;
    }

    /// Matches won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }
}

fn move_prompt(variant: Variant) -> &'static str {
    if variant.gravity() {
        "Please enter column-letter and row-number (e.g., a1):"
    } else {
        "Please enter row number and column number separated by a comma."
    }
}

fn malformed_message(variant: Variant) -> &'static str {
    if variant.gravity() {
        "Invalid move. Please try again."
    } else {
        "Invalid input. Please enter row and column as two integers separated by a comma."
    }
}

fn rematch_prompt(variant: Variant) -> &'static str {
    if variant.gravity() {
        "Another game (y/n)?"
    } else {
        "Another game? Enter Y or y for yes."
    }
}

/// "either 0, 1, or 2" for a three-wide board.
fn index_choices(count: usize) -> String {
    let labels: Vec<String> = (0..count).map(|i| i.to_string()).collect();
    match labels.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("either {first} or {second}"),
        [init @ .., last] => format!("either {}, or {last}", init.join(", ")),
    }
}

fn out_of_range_message(variant: Variant) -> String {
    if variant.gravity() {
        "Invalid move. Please try again.".to_string()
    } else {
        format!(
            "Invalid entry: try again.\nRow & column numbers must be {}.",
            index_choices(variant.rows().min(variant.cols()))
        )
    }
}

fn rejection_message(variant: Variant, err: &MoveError) -> String {
    match (err, variant.gravity()) {
        (MoveError::OutOfRange(_), _) => out_of_range_message(variant),
        (MoveError::CellOccupied(_), true) => {
            "That column is full.\nPlease make another selection.".to_string()
        }
        (MoveError::CellOccupied(_), false) => {
            "That cell is already taken.\nPlease make another selection.".to_string()
        }
        (MoveError::WrongShape(_) | MoveError::GameOver, _) => err.to_string(),
    }
}

fn echo_cell(row: impl std::fmt::Display, col: impl std::fmt::Display) -> String {
    format!("You have entered row #{row}\n\t\t  and column #{col}")
}

/// Interactive session over a reader and a writer.
pub struct Session<R, W> {
    variant: Variant,
    config: ConsoleConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session for `variant`.
    pub fn new(variant: Variant, config: ConsoleConfig, input: R, output: W) -> Self {
        Self {
            variant,
            config,
            input,
            output,
        }
    }

    /// Plays matches until a rematch is declined, the match cap is reached,
    /// or input runs out.
    ///
    /// # Errors
    ///
    /// Fails only if reading input or writing output fails.
    #[instrument(skip(self), fields(variant = %self.variant))]
    pub fn run(mut self) -> Result<SessionSummary> {
        info!("Session started");
        let mut summary = SessionSummary::default();

        while let Some(state) = self.play_match()? {
            summary.record(state);

            if let Some(max) = *self.config.max_matches()
                && summary.matches >= max
            {
                info!(max, "Match limit reached");
                break;
            }

            writeln!(self.output, "{}", rematch_prompt(self.variant))?;
            self.output.flush()?;
            let wants_rematch = self
                .read_line()?
                .is_some_and(|answer| input::parse_rematch(&answer));
            if !wants_rematch {
                break;
            }
            debug!("Rematch accepted");
        }

        writeln!(self.output, "Thank you for playing!")?;
        self.output.flush()?;
        info!(?summary, "Session finished");
        Ok(summary)
    }

    /// Plays one match. Returns `None` if input ran out before it finished.
    fn play_match(&mut self) -> Result<Option<MatchState>> {
        let mut game = Match::new(self.variant);
        writeln!(self.output, "New Game: X goes first.\n")?;
        write!(self.output, "{}", render::render_board(&game.snapshot()))?;

        while let Some(player) = game.to_move() {
            if *self.config.show_playable() {
                let hint = render::playable_hint(&game.snapshot());
                writeln!(self.output, "Available positions are: {hint}")?;
            }
            writeln!(self.output, "{player}'s turn.")?;
            writeln!(self.output, "Where do you want your {player} placed?")?;
            writeln!(self.output, "{}", move_prompt(self.variant))?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                info!(%player, "Input closed mid-match");
                return Ok(None);
            };

            let mv = match input::parse_move(self.variant, &line) {
                Ok(mv) => mv,
                Err(InputError::OutOfRange { row, col }) => {
                    debug!(row, col, "Negative cell index");
                    writeln!(self.output, "{}", echo_cell(row, col))?;
                    writeln!(self.output, "{}\n", out_of_range_message(self.variant))?;
                    continue;
                }
                Err(e) => {
                    debug!(error = %e, "Unreadable move");
                    writeln!(self.output, "{}\n", malformed_message(self.variant))?;
                    continue;
                }
            };
            if let Move::Cell { row, col } = mv {
                writeln!(self.output, "{}", echo_cell(row, col))?;
            }

            match game.submit(mv) {
                Ok(outcome) => {
                    writeln!(self.output, "Thank you for your selection.")?;
                    if outcome == Outcome::Ongoing {
                        write!(self.output, "{}", render::render_board(&game.snapshot()))?;
                    }
                }
                Err(e) => {
                    let message = rejection_message(self.variant, &e);
                    writeln!(self.output, "{message}\n")?;
                }
            }
        }

        match game.outcome().winner() {
            Some(winner) => writeln!(self.output, "\n{winner} IS THE WINNER!!!")?,
            None => writeln!(self.output, "\nDRAW! NOBODY WINS!")?,
        }
        write!(self.output, "{}", render::render_board(&game.snapshot()))?;

        Ok(Some(game.state()))
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        Ok((read > 0).then_some(line))
    }
}
