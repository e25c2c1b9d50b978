//! Board evaluation: the single source of truth for game status.

use super::super::{Board, GameStatus};
use super::draw::is_full;
use super::win::check_winner;

/// Evaluates a board into a [`GameStatus`].
///
/// A completed line wins (earliest line in fixed order), otherwise a full
/// board is a draw, otherwise the game is in progress.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((player, line)) = check_winner(board) {
        GameStatus::Won { player, line }
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::{Line, Player, Position, Square};
    use super::*;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_win_reports_line() {
        let board = Board::new()
            .with(Position::TopCenter, Player::O)
            .with(Position::Center, Player::O)
            .with(Position::BottomCenter, Player::O)
            .with(Position::TopLeft, Player::X)
            .with(Position::BottomRight, Player::X);
        assert_eq!(
            evaluate(&board),
            GameStatus::Won {
                player: Player::O,
                line: Line::ALL[4],
            }
        );
    }

    #[test]
    fn test_win_on_last_square_is_not_draw() {
        // Full board whose last square completes the main diagonal
        let board = Board::from_squares([
            Square::Occupied(Player::X),
            Square::Occupied(Player::O),
            Square::Occupied(Player::X),
            Square::Occupied(Player::O),
            Square::Occupied(Player::X),
            Square::Occupied(Player::O),
            Square::Occupied(Player::O),
            Square::Occupied(Player::X),
            Square::Occupied(Player::X),
        ]);
        assert_eq!(evaluate(&board).winner(), Some(Player::X));
        assert_eq!(evaluate(&board).winning_line().map(Line::indices), Some([0, 4, 8]));
    }
}
