//! Strictly Console - two-player tic-tac-toe and connect four.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use strictly_console::{Cli, ConsoleConfig, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => ConsoleConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => ConsoleConfig::default(),
    };
    if cli.no_hints {
        config = config.without_hints();
    }

    let variant = cli.command.variant();
    info!(%variant, ?config, "Starting console session");

    let summary = Session::new(variant, config, io::stdin().lock(), io::stdout().lock()).run()?;

    info!(
        matches = *summary.matches(),
        x_wins = *summary.x_wins(),
        o_wins = *summary.o_wins(),
        draws = *summary.draws(),
        "Goodbye"
    );
    Ok(())
}
