//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... and the player to move must be
/// the next one in that pattern while the game is running. Once the game
/// is over the last mover stays current.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let Some(first) = history.first() else {
            return game.current_player() == Player::X;
        };

        if first.player != Player::X {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let last = history[history.len() - 1].player;
        if game.status().is_terminal() {
            game.current_player() == last
        } else {
            game.current_player() == last.opponent()
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
