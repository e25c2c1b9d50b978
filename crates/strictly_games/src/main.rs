//! Strictly Games - terminal tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use strictly_games::{Cli, Terminal};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so the board on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = cli.load_config().context("Failed to load configuration")?;
    info!(mode = %config.mode(), delay_ms = config.computer_delay_ms(), "Starting Strictly Games");

    let mut terminal = Terminal::new(&config);
    terminal
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
}
