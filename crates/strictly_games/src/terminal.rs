//! Line-oriented terminal front end.
//!
//! Reads commands from an async line source, feeds them to the
//! [`Driver`], and schedules the computer's delayed replies.

use crate::config::GameConfig;
use crate::driver::{Driver, PendingMove, Resolution, Turn};
use crate::render::render;
use crate::scheduler::Scheduler;
use anyhow::{Context, Result};
use derive_more::Display;
use strictly_tictactoe::Position;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  1-9 or a label (e.g. center, top-left)  place your mark
  r, reset                                 start a new game
  m, mode                                  switch between vs computer and 2 players
  h, help                                  show this help
  q, quit                                  leave
";

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark at a zero-based board index (0-8).
    Place(usize),
    /// Start a new game.
    Reset,
    /// Toggle between the two modes.
    ToggleMode,
    /// Show the command list.
    Help,
    /// Leave the program.
    Quit,
}

/// Input that cannot be turned into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommandError {
    /// A number that does not name a square, as typed.
    #[display("Square {} is out of range (must be 1-9)", _0)]
    OutOfRange(String),

    /// Anything else.
    #[display("Unknown command: {:?} (type 'help' for commands)", _0)]
    Unknown(String),
}

impl std::error::Error for CommandError {}

/// Parses one line of input.
///
/// Numbers are 1-based as shown on the board, so `1` is index 0.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let typed = line.trim();
    let input = typed.to_lowercase();
    match input.as_str() {
        "r" | "reset" => return Ok(Command::Reset),
        "m" | "mode" => return Ok(Command::ToggleMode),
        "h" | "help" | "?" => return Ok(Command::Help),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let digits = input.strip_prefix('-').unwrap_or(&input);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return match input.parse::<usize>() {
            Ok(number @ 1..=9) => Ok(Command::Place(number - 1)),
            _ => Err(CommandError::OutOfRange(typed.to_string())),
        };
    }

    Position::from_label(&input)
        .map(|pos| Command::Place(pos.to_index()))
        .ok_or_else(|| CommandError::Unknown(typed.to_string()))
}

/// Terminal session: one driver, one scheduler.
#[derive(Debug)]
pub struct Terminal {
    driver: Driver,
    scheduler: Scheduler,
    fired: mpsc::UnboundedReceiver<PendingMove>,
}

impl Terminal {
    /// Builds a session from configuration.
    #[instrument]
    pub fn new(config: &GameConfig) -> Self {
        let (scheduler, fired) = Scheduler::new(config.computer_delay());
        Self {
            driver: Driver::new(*config.mode()),
            scheduler,
            fired,
        }
    }

    /// Returns the driver.
    pub fn driver(&self) -> &Driver {
        &self.driver
    }

    /// Runs until `quit` or end of input.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Starting terminal session");
        let mut lines = input.lines();
        write(&mut output, "Strictly Tic-Tac-Toe (type 'help' for commands)\n").await?;
        write(&mut output, &render(self.driver.state())).await?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line.context("Failed to read input")? else {
                        debug!("End of input");
                        break;
                    };
                    if !self.handle_line(&line, &mut output).await? {
                        break;
                    }
                }
                Some(pending) = self.fired.recv() => {
                    self.handle_fired(pending, &mut output).await?;
                }
            }
        }

        self.scheduler.cancel();
        info!("Terminal session ended");
        Ok(())
    }

    /// Handles one input line. Returns false when the session should end.
    #[instrument(skip(self, output))]
    pub async fn handle_line<W>(&mut self, line: &str, output: &mut W) -> Result<bool>
    where
        W: AsyncWrite + Unpin,
    {
        if line.trim().is_empty() {
            return Ok(true);
        }

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, "Input rejected");
                write(output, &format!("{}\n", e)).await?;
                return Ok(true);
            }
        };

        match command {
            Command::Quit => return Ok(false),
            Command::Help => write(output, HELP).await?,
            Command::Reset => {
                self.scheduler.cancel();
                let turn = self.driver.reset();
                self.show(turn, output).await?;
            }
            Command::ToggleMode => {
                self.scheduler.cancel();
                let turn = self.driver.toggle_mode();
                self.show(turn, output).await?;
            }
            Command::Place(index) => match self.driver.select(index) {
                Ok(turn) => self.show(turn, output).await?,
                Err(e) => {
                    debug!(error = %e, "Move rejected");
                    write(output, &format!("{}\n", e)).await?;
                }
            },
        }
        Ok(true)
    }

    /// Plays a fired computer ticket unless it has gone stale.
    #[instrument(skip(self, output))]
    pub async fn handle_fired<W>(&mut self, pending: PendingMove, output: &mut W) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        match self.driver.resolve(pending)? {
            Resolution::Applied { position, .. } => {
                write(output, &format!("Computer played {}\n", position)).await?;
                let turn = self.driver.turn();
                self.show(turn, output).await
            }
            Resolution::Stale => Ok(()),
        }
    }

    async fn show<W>(&mut self, turn: Turn, output: &mut W) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        write(output, &render(self.driver.state())).await?;
        if let Turn::Computer(pending) = turn {
            self.scheduler.schedule(pending);
        }
        Ok(())
    }
}

async fn write<W>(output: &mut W, text: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    output
        .write_all(text.as_bytes())
        .await
        .context("Failed to write output")?;
    output.flush().await.context("Failed to flush output")?;
    Ok(())
}
