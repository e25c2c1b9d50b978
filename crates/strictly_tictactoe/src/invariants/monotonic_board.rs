//! Monotonic board invariant: squares never change once set.

use super::super::{Board, GameState, Square};
use super::Invariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board, every move lands on an
/// empty square and the result equals the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mode, Move, Player, Position};

    #[test]
    fn test_new_game_holds() {
        let game = GameState::new(Mode::HumanVsHuman);
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = GameState::new(Mode::HumanVsHuman);
        game.apply_move(0).expect("legal move");
        game.history.push(Move::new(Player::O, Position::TopLeft));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
