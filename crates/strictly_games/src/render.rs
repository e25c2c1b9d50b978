//! Text rendering of the game for the terminal.

use strictly_tictactoe::{GameState, GameStatus, Mode};

/// Describes whose turn it is.
pub fn turn_line(state: &GameState) -> String {
    match state.mode() {
        Mode::HumanVsComputer if state.is_computer_turn() => "Computer's turn".to_string(),
        Mode::HumanVsComputer => "Your turn".to_string(),
        Mode::HumanVsHuman => format!("Player {}'s turn", state.current_player()),
    }
}

/// Describes the outcome, once there is one.
pub fn status_line(state: &GameState) -> Option<String> {
    match state.status() {
        GameStatus::InProgress => None,
        GameStatus::Draw => Some("It's a draw!".to_string()),
        GameStatus::Won { player, .. } => Some(match state.human_player() {
            Some(human) if human == *player => "You win!".to_string(),
            Some(_) => "Computer wins!".to_string(),
            None => format!("Player {} wins!", player),
        }),
    }
}

/// Renders the board with the mode and the turn or outcome line.
pub fn render(state: &GameState) -> String {
    let board = state.board().display(state.status().winning_line());
    let footer = status_line(state).unwrap_or_else(|| turn_line(state));
    format!("\n{}\n\nMode: {}\n{}\n", board, state.mode().name(), footer)
}
