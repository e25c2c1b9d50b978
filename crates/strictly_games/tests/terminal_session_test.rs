//! End-to-end terminal sessions over in-memory pipes.

use std::time::Duration;
use strictly_games::{GameConfig, Terminal};
use strictly_tictactoe::Mode;
use tokio::io::{AsyncReadExt, AsyncWriteExt, BufReader};

async fn play(mode: Mode, script: &[&str]) -> (String, Terminal) {
    let (mut input_tx, input_rx) = tokio::io::duplex(4096);
    let (output_tx, mut output_rx) = tokio::io::duplex(1 << 20);

    let session = tokio::spawn(async move {
        let mut terminal = Terminal::new(&GameConfig::new(mode, 500));
        terminal
            .run(BufReader::new(input_rx), output_tx)
            .await
            .expect("session runs");
        terminal
    });

    for line in script {
        input_tx
            .write_all(format!("{}\n", line).as_bytes())
            .await
            .expect("write input");
        // Longer than the computer's delay, so any reply lands first.
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
    drop(input_tx);

    let terminal = session.await.expect("session task");
    let mut text = String::new();
    output_rx.read_to_string(&mut text).await.expect("read output");
    (text, terminal)
}

#[tokio::test(start_paused = true)]
async fn test_computer_replies_after_delay() {
    let (text, terminal) = play(Mode::HumanVsComputer, &["5", "quit"]).await;

    assert!(text.contains("Computer played Top-left"));
    assert_eq!(terminal.driver().state().history().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_two_player_game_to_win() {
    let (text, terminal) = play(Mode::HumanVsHuman, &["1", "5", "2", "7", "3"]).await;

    assert!(text.contains("Player X wins!"));
    assert!(text.contains("[X]|[X]|[X]"));
    assert!(!terminal.driver().state().is_active());
}

#[tokio::test(start_paused = true)]
async fn test_mode_toggle_starts_fresh_game() {
    let (text, terminal) = play(Mode::HumanVsComputer, &["5", "mode", "1"]).await;

    assert!(text.contains("Mode: 2 Players"));
    let state = terminal.driver().state();
    assert_eq!(state.mode(), Mode::HumanVsHuman);
    assert_eq!(state.history().len(), 1);
    assert_eq!(terminal.driver().epoch(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_off_board_number_uses_board_numbering() {
    let (text, terminal) = play(Mode::HumanVsHuman, &["0", "10", "9"]).await;

    assert!(text.contains("Square 0 is out of range (must be 1-9)"));
    assert!(text.contains("Square 10 is out of range (must be 1-9)"));
    assert_eq!(terminal.driver().state().history().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_occupied_square_reported() {
    let (text, terminal) = play(Mode::HumanVsHuman, &["5", "5"]).await;

    assert!(text.contains("Square Center is already occupied"));
    assert_eq!(terminal.driver().state().history().len(), 1);
}
