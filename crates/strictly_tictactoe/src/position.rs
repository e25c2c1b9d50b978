//! Named board positions for tic-tac-toe moves.

use super::action::MoveError;
use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8).
///
/// Drivers present the full set of positions and filter out the
/// occupied ones with [`Position::valid_moves`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parses an exact label, ignoring case.
    #[instrument]
    pub fn from_label(s: &str) -> Option<Position> {
        let wanted = s.trim().to_lowercase();
        <Position as strum::IntoEnumIterator>::iter().find(|pos| pos.label().to_lowercase() == wanted)
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of the position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of the position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// All 9 positions.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Filters positions by board state - returns only empty squares,
    /// in index order.
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl TryFrom<i64> for Position {
    type Error = MoveError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        usize::try_from(index)
            .ok()
            .and_then(Position::from_index)
            .ok_or(MoveError::OutOfRange(i128::from(index)))
    }
}

impl TryFrom<usize> for Position {
    type Error = MoveError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Position::from_index(index)
            .ok_or_else(|| MoveError::OutOfRange(widen(index)))
    }
}

// usize is at most 64 bits on every supported target, so this is lossless.
fn widen(index: usize) -> i128 {
    index as i128
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_and_col() {
        assert_eq!((Position::Center.row(), Position::Center.col()), (1, 1));
        assert_eq!((Position::BottomLeft.row(), Position::BottomLeft.col()), (2, 0));
        assert_eq!((Position::TopRight.row(), Position::TopRight.col()), (0, 2));
    }

    #[test]
    fn test_signed_conversion_rejects_negative() {
        assert_eq!(Position::try_from(-1_i64), Err(MoveError::OutOfRange(-1)));
        assert_eq!(Position::try_from(9_i64), Err(MoveError::OutOfRange(9)));
        assert_eq!(Position::try_from(4_i64), Ok(Position::Center));
    }

    #[test]
    fn test_unsigned_conversion_keeps_huge_index() {
        assert_eq!(
            Position::try_from(usize::MAX),
            Err(MoveError::OutOfRange(usize::MAX as i128))
        );
        assert_eq!(
            Position::try_from(i64::MAX as usize + 1),
            Err(MoveError::OutOfRange(i128::from(i64::MAX) + 1))
        );
    }

    #[test]
    fn test_from_label() {
        assert_eq!(Position::from_label("center"), Some(Position::Center));
        assert_eq!(Position::from_label(" Bottom-Right "), Some(Position::BottomRight));
        assert_eq!(Position::from_label("middle"), None);
    }
}
