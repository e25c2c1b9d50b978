//! Command-line interface for strictly_games.

use crate::config::{ConfigError, GameConfig};
use clap::Parser;
use std::path::PathBuf;
use strictly_tictactoe::Mode;

/// Strictly Games - tic-tac-toe against a friend or a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Opponent: human-vs-computer or human-vs-human
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// Delay before the computer moves, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

impl Cli {
    /// Resolves the effective configuration: file (or defaults), then flags.
    pub fn load_config(&self) -> Result<GameConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };
        Ok(base.with_overrides(self.mode, self.delay_ms))
    }
}
