//! Error type for the tic-tac-toe engine.

use super::action::MoveError;
use super::types::GameStatus;

/// Errors reported by [`GameState`](crate::GameState) and the search engine.
///
/// Every variant is recoverable: a failed call leaves all state untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// The move was rejected by the rules.
    #[display("Illegal move: {}", _0)]
    #[from]
    IllegalMove(MoveError),

    /// The engine was asked for a move on a finished board.
    #[display("Invalid state: no move to search, game is {}", _0)]
    InvalidState(GameStatus),

    /// A postcondition failed after applying a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IllegalMove(e) => Some(e),
            _ => None,
        }
    }
}
