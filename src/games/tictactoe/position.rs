//! Square numbering for the noughts and crosses board.
//!
//! Players address squares by number, 1 to 9 in reading order. Everything
//! past the input boundary works in terms of [`Position`] and its
//! (row, column) coordinates.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Square 1, (0, 0)
    TopLeft,
    /// Square 2, (0, 1)
    TopCenter,
    /// Square 3, (0, 2)
    TopRight,
    /// Square 4, (1, 0)
    MiddleLeft,
    /// Square 5, (1, 1)
    Center,
    /// Square 6, (1, 2)
    MiddleRight,
    /// Square 7, (2, 0)
    BottomLeft,
    /// Square 8, (2, 1)
    BottomCenter,
    /// Square 9, (2, 2)
    BottomRight,
}

impl Position {
    /// All 9 positions in reading order.
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

    /// Label for this position (for display and logs).
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

    /// Converts a square number (1-9) into a position.
    #[instrument]
    pub fn from_square_number(number: u8) -> Option<Self> {
        match number {
            1..=9 => Some(Self::ALL[usize::from(number - 1)]),
            _ => None,
        }
    }

    /// The square number (1-9) players type to select this position.
    pub fn square_number(self) -> u8 {
        let (row, column) = self.coordinates();
        (row * 3 + column + 1) as u8
    }

    /// Creates a position from (row, column), both in 0..3.
    pub fn from_coordinates(row: usize, column: usize) -> Option<Self> {
        if row < 3 && column < 3 {
            Some(Self::ALL[row * 3 + column])
        } else {
            None
        }
    }

    /// Returns the (row, column) of this position.
    pub fn coordinates(self) -> (usize, usize) {
        match self {
            Position::TopLeft => (0, 0),
            Position::TopCenter => (0, 1),
            Position::TopRight => (0, 2),
            Position::MiddleLeft => (1, 0),
            Position::Center => (1, 1),
            Position::MiddleRight => (1, 2),
            Position::BottomLeft => (2, 0),
            Position::BottomCenter => (2, 1),
            Position::BottomRight => (2, 2),
        }
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

/// Maps a square number (1-9) to its (row, column).
///
/// Returns `None` outside 1-9; callers validate input through this before
/// touching the board.
pub fn square_to_coordinates(number: u8) -> Option<(usize, usize)> {
    Position::from_square_number(number).map(Position::coordinates)
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.square_number(), self.label())
    }
}
