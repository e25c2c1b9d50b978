//! Strictly Games - terminal tic-tac-toe on top of `strictly_tictactoe`.
//!
//! # Architecture
//!
//! - **Driver**: owns the game, sequences turns, guards against stale computer moves
//! - **Scheduler**: delivers the computer's move after a cancellable delay
//! - **Terminal**: reads commands, renders the board
//! - **Config**: TOML file plus command-line overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod driver;
mod render;
mod scheduler;
mod terminal;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use driver::{Driver, DriverError, PendingMove, Resolution, Turn};
pub use render::{render, status_line, turn_line};
pub use scheduler::Scheduler;
pub use terminal::{Command, CommandError, Terminal, parse_command};
