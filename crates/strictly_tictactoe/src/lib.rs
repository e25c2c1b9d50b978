//! Tic-tac-toe game engine with a perfect-play computer opponent.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`Position`], [`Line`], [`Mode`]
//! - **Rules**: [`evaluate`] turns a board into a [`GameStatus`]
//! - **State**: [`GameState`] owns one game and validates every move
//! - **Search**: [`best_move`] runs exhaustive minimax on a board snapshot
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameState, Mode, best_move};
//!
//! let mut game = GameState::new(Mode::HumanVsComputer);
//! game.apply_move(4)?;
//!
//! if let (Some(computer), Some(human)) = (game.computer_player(), game.human_player()) {
//!     let reply = best_move(*game.board(), computer, human)?;
//!     game.apply_move(reply.to_index())?;
//! }
//! # Ok::<(), strictly_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod error;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod search;
mod types;

pub use action::{Move, MoveError};
pub use error::GameError;
pub use game::GameState;
pub use position::Position;
pub use rules::evaluate;
pub use search::{WIN_SCORE, best_move, score_moves};
pub use types::{Board, GameStatus, Line, Mode, Player, Square};
