//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are small and `Copy`; the search engine works on copies and
/// never touches the board owned by a [`GameState`](crate::GameState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns a copy of this board with `player` placed at `pos`.
    pub fn with(mut self, pos: Position, player: Player) -> Self {
        self.set(pos, Square::Occupied(player));
        self
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based number. Squares on `highlight`
    /// are wrapped in brackets.
    pub fn display(&self, highlight: Option<&Line>) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = Position::ALL[row * 3 + col];
                let symbol = match self.get(pos) {
                    Square::Empty => (pos.to_index() + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                if highlight.is_some_and(|line| line.contains(pos)) {
                    result.push_str(&format!("[{}]", symbol));
                } else {
                    result.push_str(&format!(" {} ", symbol));
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n---+---+---\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// One of the eight winning triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// All winning lines in evaluation order: rows, columns, diagonals.
    pub const ALL: [Line; 8] = [
        // Rows
        Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
        Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
        // Columns
        Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
        Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
        Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
        // Diagonals
        Line([Position::TopLeft, Position::Center, Position::BottomRight]),
        Line([Position::TopRight, Position::Center, Position::BottomLeft]),
    ];

    /// Returns the three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Returns the three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Checks whether the line passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win along `line`.
    Won {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has an outcome.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<&Line> {
        match self {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won { player, line } => {
                write!(f, "won by {} on {:?}", player, line.indices())
            }
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

/// Who sits on the other side of the board.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "kebab-case")]
pub enum Mode {
    /// Two humans share the board.
    HumanVsHuman,
    /// The human plays X, the computer plays O.
    #[default]
    HumanVsComputer,
}

impl Mode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            Mode::HumanVsHuman => Mode::HumanVsComputer,
            Mode::HumanVsComputer => Mode::HumanVsHuman,
        }
    }

    /// The mark played by the computer, if this mode has one.
    pub fn computer_player(self) -> Option<Player> {
        match self {
            Mode::HumanVsHuman => None,
            Mode::HumanVsComputer => Some(Player::O),
        }
    }

    /// The mark played by the human in a vs-computer game.
    pub fn human_player(self) -> Option<Player> {
        self.computer_player().map(Player::opponent)
    }

    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::HumanVsHuman => "2 Players",
            Mode::HumanVsComputer => "vs Computer",
        }
    }
}
