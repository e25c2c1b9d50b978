//! Mutable game state: board, turn and status for one game.

use super::action::Move;
use super::contracts::{Contract, MoveContract};
use super::error::GameError;
use super::rules::evaluate;
use super::types::{Board, GameStatus, Mode, Player, Square};
use super::Position;
use tracing::{debug, info, instrument};

/// Complete state of one game.
///
/// The only way to change the board is [`GameState::apply_move`]. Once the
/// status is terminal every move is rejected until [`GameState::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    pub(crate) mode: Mode,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            mode,
            history: Vec::new(),
        }
    }

    /// Rebuilds a game by applying `moves` in order.
    #[instrument]
    pub fn replay(mode: Mode, moves: &[Position]) -> Result<Self, GameError> {
        let mut game = Self::new(mode);
        for pos in moves {
            game.apply_position(*pos)?;
        }
        Ok(game)
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Fails with [`GameError::IllegalMove`] when the index is out of range,
    /// the square is taken or the game is over; nothing changes on failure.
    /// Returns the status after the move.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, index: usize) -> Result<GameStatus, GameError> {
        let position = MoveContract::pre(self, &index)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.current_player;
        self.board.set(position, Square::Occupied(player));
        self.history.push(Move::new(player, position));
        self.status = evaluate(&self.board);

        if self.status.is_terminal() {
            info!(status = %self.status, "Game finished");
        } else {
            self.current_player = player.opponent();
        }

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        debug!(%position, status = %self.status, "Move applied");
        Ok(self.status)
    }

    /// Places the current player's mark at `position`.
    pub fn apply_position(&mut self, position: Position) -> Result<GameStatus, GameError> {
        self.apply_move(position.to_index())
    }

    /// Reinitializes to a fresh game, switching mode when one is given.
    #[instrument(skip(self), fields(old_mode = %self.mode))]
    pub fn reset(&mut self, mode: Option<Mode>) {
        *self = Self::new(mode.unwrap_or(self.mode));
        debug!(mode = %self.mode, "Game reset");
    }

    /// Switches between human and computer opponents. Always resets.
    pub fn toggle_mode(&mut self) {
        self.reset(Some(self.mode.toggled()));
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move, or the last mover once the game is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true while moves are accepted.
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    /// The computer's mark in this mode, if any.
    pub fn computer_player(&self) -> Option<Player> {
        self.mode.computer_player()
    }

    /// The human's mark in a vs-computer game.
    pub fn human_player(&self) -> Option<Player> {
        self.mode.human_player()
    }

    /// Returns true when the game is running and the computer is to move.
    pub fn is_computer_turn(&self) -> bool {
        self.is_active() && self.computer_player() == Some(self.current_player)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
