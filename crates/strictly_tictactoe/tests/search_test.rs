//! Perfect-play properties of the minimax search.

use strictly_tictactoe::{Board, GameError, GameState, GameStatus, Mode, Player, Position, best_move, evaluate};

/// Plays out every human reply, letting the engine answer as `computer`.
/// Returns the number of finished games explored.
fn explore(board: Board, to_move: Player, computer: Player) -> usize {
    let human = computer.opponent();
    match evaluate(&board) {
        GameStatus::Won { player, .. } => {
            assert_ne!(player, human, "human won on {}", board.display(None));
            return 1;
        }
        GameStatus::Draw => return 1,
        GameStatus::InProgress => {}
    }

    if to_move == computer {
        let pos = best_move(board, computer, human).expect("in progress");
        assert!(board.is_empty(pos));
        explore(board.with(pos, computer), human, computer)
    } else {
        Position::valid_moves(&board)
            .into_iter()
            .map(|pos| explore(board.with(pos, human), computer, computer))
            .sum()
    }
}

#[test]
fn test_computer_never_loses_as_second_player() {
    let games = explore(Board::new(), Player::X, Player::O);
    assert!(games > 0);
}

#[test]
fn test_computer_never_loses_as_first_player() {
    let games = explore(Board::new(), Player::X, Player::X);
    assert!(games > 0);
}

#[test]
fn test_self_play_draws() {
    let mut game = GameState::new(Mode::HumanVsHuman);
    while game.is_active() {
        let me = game.current_player();
        let pos = best_move(*game.board(), me, me.opponent()).expect("in progress");
        game.apply_position(pos).expect("engine move is legal");
    }
    assert_eq!(game.status(), &GameStatus::Draw);
}

#[test]
fn test_center_opening_answered_with_corner() {
    let mut game = GameState::new(Mode::HumanVsComputer);
    game.apply_move(4).expect("legal move");

    let reply = best_move(*game.board(), Player::O, Player::X).expect("in progress");
    assert!(
        [0, 2, 6, 8].contains(&reply.to_index()),
        "expected a corner, got {}",
        reply
    );
}

#[test]
fn test_corner_opening_answered_with_center() {
    // Against a corner opening, the center is the only non-losing reply.
    let board = Board::new().with(Position::TopLeft, Player::X);
    assert_eq!(best_move(board, Player::O, Player::X), Ok(Position::Center));
}

#[test]
fn test_wins_when_allowed() {
    // X blundered into the edge: O O _ / X _ _ / X _ X  with O to move.
    let board = Board::new()
        .with(Position::TopLeft, Player::O)
        .with(Position::TopCenter, Player::O)
        .with(Position::MiddleLeft, Player::X)
        .with(Position::BottomLeft, Player::X)
        .with(Position::BottomRight, Player::X);
    let pos = best_move(board, Player::O, Player::X).expect("in progress");
    assert_eq!(pos, Position::TopRight);
}

#[test]
fn test_full_board_is_invalid_state() {
    let game = GameState::replay(
        Mode::HumanVsHuman,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ],
    )
    .expect("legal moves");
    assert_eq!(
        best_move(*game.board(), Player::O, Player::X),
        Err(GameError::InvalidState(GameStatus::Draw))
    );
}

#[test]
fn test_search_does_not_touch_state() {
    let mut game = GameState::new(Mode::HumanVsComputer);
    game.apply_move(0).expect("legal move");
    let snapshot = game.clone();
    let _ = best_move(*game.board(), Player::O, Player::X);
    assert_eq!(game, snapshot);
}
