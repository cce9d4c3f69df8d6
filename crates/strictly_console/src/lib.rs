//! Strictly Console library - console glue around the board engine
//!
//! Everything here is text in, text out: parsing typed moves, drawing ASCII
//! boards, and the match/rematch loop. Game rules live in `strictly_boards`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod input;
pub mod render;
pub mod session;

pub use cli::{Cli, Command};
pub use config::{ConfigError, ConsoleConfig};
pub use input::InputError;
pub use session::{Session, SessionSummary};
