//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Preconditions always run and make `apply_move` atomic;
//! postconditions run in debug builds only.

use super::action::MoveError;
use super::error::GameError;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::{GameState, Position};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// What the precondition yields when it holds.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

/// Precondition: The game has not finished.
pub struct GameActive;

impl GameActive {
    /// Rejects moves on a finished game.
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.status().is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The index names a square.
pub struct InRange;

impl InRange {
    /// Converts the index into a position.
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::try_from(index)
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects occupied squares.
    pub fn check(position: Position, game: &GameState) -> Result<(), MoveError> {
        if game.board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(position))
        }
    }
}

/// Composite precondition: the game is running, the index is on the board
/// and the square is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(index: usize, game: &GameState) -> Result<Position, MoveError> {
        GameActive::check(game)?;
        let position = InRange::check(index)?;
        SquareIsEmpty::check(position, game)?;
        Ok(position)
    }
}

/// Contract for placing the current player's mark at a board index.
///
/// Postconditions:
/// - exactly one move was added to the history
/// - board is monotonic, players alternate, status matches the board
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    type Checked = Position;

    fn pre(game: &GameState, index: &usize) -> Result<Position, GameError> {
        Ok(LegalMove::check(*index, game)?)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), GameError> {
        if after.history().len() != before.history().len() + 1 {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "History did not grow by one move"
            );
            return Err(GameError::InvariantViolation(
                "Postcondition failed: history must grow by exactly one move".to_string(),
            ));
        }

        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Move postcondition failed");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mode, Player, Square};

    #[test]
    fn test_precondition_empty_square() {
        let game = GameState::new(Mode::HumanVsHuman);
        assert_eq!(MoveContract::pre(&game, &4), Ok(Position::Center));
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = GameState::new(Mode::HumanVsHuman);
        game.apply_move(4).expect("legal move");
        assert_eq!(
            MoveContract::pre(&game, &4),
            Err(GameError::IllegalMove(MoveError::SquareOccupied(Position::Center)))
        );
    }

    #[test]
    fn test_precondition_out_of_range() {
        let game = GameState::new(Mode::HumanVsHuman);
        assert_eq!(
            MoveContract::pre(&game, &9),
            Err(GameError::IllegalMove(MoveError::OutOfRange(9)))
        );
    }

    #[test]
    fn test_game_over_checked_before_range() {
        let game = GameState::replay(
            Mode::HumanVsHuman,
            &[
                Position::TopLeft,
                Position::Center,
                Position::TopCenter,
                Position::BottomLeft,
                Position::TopRight,
            ],
        )
        .expect("legal moves");
        assert_eq!(LegalMove::check(42, &game), Err(MoveError::GameOver));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new(Mode::HumanVsHuman);
        let mut after = before.clone();
        after.apply_move(4).expect("legal move");
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameState::new(Mode::HumanVsHuman);
        let mut after = before.clone();
        after.apply_move(4).expect("legal move");

        after.board.set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(GameError::InvariantViolation(_))
        ));
    }
}
