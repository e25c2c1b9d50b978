//! Status consistency invariant: the stored status matches the board.

use super::super::GameState;
use super::super::rules::evaluate;
use super::Invariant;

/// Invariant: `status` equals `evaluate(board)`.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        *game.status() == evaluate(game.board())
    }

    fn description() -> &'static str {
        "Stored status matches board evaluation"
    }
}
