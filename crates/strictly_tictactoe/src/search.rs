//! Exhaustive minimax search for the computer's move.
//!
//! The search is a pure function of a board snapshot. Boards are `Copy`,
//! so every node works on its own copy and nothing needs undoing.

use super::error::GameError;
use super::rules::evaluate;
use super::types::{Board, GameStatus, Player};
use super::Position;
use tracing::{debug, instrument};

/// Score of a win found at depth zero.
pub const WIN_SCORE: i32 = 10;

/// Returns the best square for `computer`, with `human` replying.
///
/// Ties are broken by scanning squares in index order and keeping the
/// first strictly greatest score.
///
/// # Errors
///
/// Returns [`GameError::InvalidState`] if the board is already won or full.
#[instrument(skip(board), fields(board = %board.display(None)))]
pub fn best_move(board: Board, computer: Player, human: Player) -> Result<Position, GameError> {
    let mut best: Option<(Position, i32)> = None;
    for (pos, score) in score_moves(board, computer, human)? {
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    let (pos, score) = best.ok_or(GameError::InvalidState(evaluate(&board)))?;
    debug!(%pos, score, "Best move chosen");
    Ok(pos)
}

/// Scores every empty square for `computer` in index order.
///
/// Each score is the minimax value after the computer plays that square,
/// searched at depth zero with the human to reply.
pub fn score_moves(
    board: Board,
    computer: Player,
    human: Player,
) -> Result<Vec<(Position, i32)>, GameError> {
    let status = evaluate(&board);
    if status.is_terminal() {
        return Err(GameError::InvalidState(status));
    }

    let search = Minimax { computer, human };
    Ok(Position::valid_moves(&board)
        .into_iter()
        .map(|pos| (pos, search.score(board.with(pos, computer), 0, false)))
        .collect())
}

struct Minimax {
    computer: Player,
    human: Player,
}

impl Minimax {
    fn score(&self, board: Board, depth: i32, maximizing: bool) -> i32 {
        match evaluate(&board) {
            GameStatus::Won { player, .. } if player == self.computer => return WIN_SCORE - depth,
            GameStatus::Won { .. } => return depth - WIN_SCORE,
            GameStatus::Draw => return 0,
            GameStatus::InProgress => {}
        }

        let mover = if maximizing { self.computer } else { self.human };
        let children = Position::valid_moves(&board)
            .into_iter()
            .map(|pos| self.score(board.with(pos, mover), depth + 1, !maximizing));

        // An in-progress board always has an empty square.
        if maximizing {
            children.max().unwrap_or(0)
        } else {
            children.min().unwrap_or(0)
        }
    }
}
