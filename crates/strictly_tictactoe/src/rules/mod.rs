//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search engine and the contracts share one definition.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::{is_draw, is_full};
pub use status::evaluate;
pub use win::check_winner;
