//! Command-line interface for strictly_console.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_boards::Variant;

/// Strictly Console - two players, one keyboard
#[derive(Parser, Debug)]
#[command(name = "strictly_console")]
#[command(about = "Tic-tac-toe and connect four for two players at one console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game to play
    #[command(subcommand)]
    pub command: Command,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Do not list playable cells before each move
    #[arg(long, global = true)]
    pub no_hints: bool,
}

/// Available games
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play tic-tac-toe on a 3x3 grid
    #[command(visible_alias = "ttt")]
    Tictactoe,

    /// Play connect four on a 6x7 grid
    #[command(visible_alias = "c4")]
    ConnectFour,
}

impl Command {
    /// Board variant for this game.
    pub fn variant(self) -> Variant {
        match self {
            Command::Tictactoe => Variant::TIC_TAC_TOE,
            Command::ConnectFour => Variant::CONNECT_FOUR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["strictly_console", "connect-four"]).unwrap();
        assert_eq!(cli.command, Command::ConnectFour);
        assert_eq!(cli.command.variant(), Variant::CONNECT_FOUR);

        let cli = Cli::try_parse_from(["strictly_console", "ttt", "--no-hints"]).unwrap();
        assert_eq!(cli.command, Command::Tictactoe);
        assert!(cli.no_hints);
    }

    #[test]
    fn test_global_config_flag() {
        let args = ["strictly_console", "--config", "games.toml", "c4"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("games.toml")));
    }

    #[test]
    fn test_missing_game_rejected() {
        assert!(Cli::try_parse_from(["strictly_console"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
