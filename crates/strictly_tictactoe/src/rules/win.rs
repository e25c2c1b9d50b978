//! Win detection logic for tic-tac-toe.

use super::super::{Board, Line, Player, Square};

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`Line::ALL`] order and the first complete line
/// is reported, so a malformed board holding several lines always yields
/// the same answer.
pub fn check_winner(board: &Board) -> Option<(Player, Line)> {
    for line in Line::ALL {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.player().map(|player| (player, line));
        }
    }

    None
}
