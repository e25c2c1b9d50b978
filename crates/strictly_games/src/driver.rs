//! Turn sequencing between the human, the computer and the game state.
//!
//! The driver owns exactly one [`GameState`]. Every reset or mode toggle
//! starts a new epoch; a computer move handed out as a [`PendingMove`]
//! in an earlier epoch is stale and is discarded by [`Driver::resolve`]
//! instead of being applied to the new game.

use derive_more::{Display, From};
use strictly_tictactoe::{GameError, GameState, GameStatus, Mode, Player, Position, best_move};
use tracing::{debug, info, instrument};

/// A computer move waiting to be played, tagged with the epoch it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMove {
    epoch: u64,
    player: Player,
}

impl PendingMove {
    /// Epoch the move was requested in.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The computer's mark.
    pub fn player(&self) -> Player {
        self.player
    }
}

/// Whose move it is after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// A human places the next mark.
    Human(Player),
    /// The computer moves next; schedule the ticket.
    Computer(PendingMove),
    /// The game is over until reset.
    Finished(GameStatus),
}

/// Outcome of resolving a pending computer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The computer played `position`.
    Applied {
        /// Square the computer took.
        position: Position,
        /// Status after the move.
        status: GameStatus,
    },
    /// The ticket belonged to an earlier game or turn and was dropped.
    Stale,
}

/// Errors reported to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum DriverError {
    /// The engine rejected the request.
    #[display("{}", _0)]
    #[from]
    Game(GameError),

    /// Board input arrived while the computer is to move.
    #[display("Waiting for the computer to move")]
    AwaitingComputer,
}

impl std::error::Error for DriverError {}

/// Owns one game and sequences human and computer turns.
#[derive(Debug, Clone)]
pub struct Driver {
    state: GameState,
    epoch: u64,
}

impl Driver {
    /// Creates a driver with a fresh game.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        Self {
            state: GameState::new(mode),
            epoch: 0,
        }
    }

    /// Returns the current game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current epoch.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Works out whose move it is.
    pub fn turn(&self) -> Turn {
        if !self.state.is_active() {
            Turn::Finished(*self.state.status())
        } else if self.state.is_computer_turn() {
            Turn::Computer(PendingMove {
                epoch: self.epoch,
                player: self.state.current_player(),
            })
        } else {
            Turn::Human(self.state.current_player())
        }
    }

    /// Applies a human move at `index` (0-8).
    ///
    /// Rejected with [`DriverError::AwaitingComputer`] while the computer is
    /// to move, so a human can never place the computer's mark.
    #[instrument(skip(self), fields(epoch = self.epoch))]
    pub fn select(&mut self, index: usize) -> Result<Turn, DriverError> {
        if self.state.is_computer_turn() {
            debug!("Ignoring board input during the computer's turn");
            return Err(DriverError::AwaitingComputer);
        }
        self.state.apply_move(index)?;
        Ok(self.turn())
    }

    /// Starts a new game in the same mode.
    #[instrument(skip(self), fields(epoch = self.epoch))]
    pub fn reset(&mut self) -> Turn {
        self.epoch += 1;
        self.state.reset(None);
        info!(epoch = self.epoch, "New game");
        self.turn()
    }

    /// Switches mode and starts a new game.
    #[instrument(skip(self), fields(epoch = self.epoch))]
    pub fn toggle_mode(&mut self) -> Turn {
        self.epoch += 1;
        self.state.toggle_mode();
        info!(epoch = self.epoch, mode = %self.state.mode(), "Mode toggled");
        self.turn()
    }

    /// Plays a pending computer move if it still belongs to this game and turn.
    ///
    /// Tickets from an earlier epoch, or for a turn that is no longer the
    /// computer's, resolve to [`Resolution::Stale`] and leave the game as is.
    #[instrument(skip(self), fields(epoch = self.epoch))]
    pub fn resolve(&mut self, pending: PendingMove) -> Result<Resolution, DriverError> {
        if pending.epoch != self.epoch
            || !self.state.is_computer_turn()
            || self.state.current_player() != pending.player
        {
            debug!(ticket_epoch = pending.epoch, "Discarding stale computer move");
            return Ok(Resolution::Stale);
        }

        let computer = pending.player;
        let position = best_move(*self.state.board(), computer, computer.opponent())?;
        let status = self.state.apply_position(position)?;
        info!(%position, %status, "Computer moved");
        Ok(Resolution::Applied { position, status })
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
