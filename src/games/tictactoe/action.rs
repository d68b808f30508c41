//! First-class action types for noughts and crosses.
//!
//! Moves are domain events, not side effects. They represent a side's
//! intent and can be validated independently of execution.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: one side placing its mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side making the move.
    pub mark: Mark,
    /// Where the mark goes.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }

    /// Returns the side making this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark.symbol(), self.position)
    }
}

/// Why a move was refused.
///
/// The first three variants are the input mistakes a human can make at the
/// prompt. Their messages are shown to the player verbatim before asking
/// again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Input was not an integer.
    #[display("Invalid input. Please enter a number!")]
    NotANumber(String),

    /// Integer outside 1-9.
    #[display("Invalid input. Please enter a number between 1 and 9.")]
    OutOfRange(i64),

    /// The square at the position is already occupied.
    #[display("The cell is already occupied. Please try again!")]
    SquareOccupied(Position),

    /// The round already reached a terminal state.
    #[display("The round is already over")]
    RoundOver,
}

impl std::error::Error for MoveError {}

/// Parses a line typed at the move prompt into a position.
///
/// Surrounding whitespace is ignored. Occupancy is not checked here since
/// that needs the board.
#[instrument]
pub fn parse_square(input: &str) -> Result<Position, MoveError> {
    let trimmed = input.trim();
    let number: i64 = trimmed.parse().map_err(|_| {
        // Integers too large for i64 are still integers.
        let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            MoveError::OutOfRange(if trimmed.starts_with('-') { i64::MIN } else { i64::MAX })
        } else {
            MoveError::NotANumber(trimmed.to_string())
        }
    })?;

    u8::try_from(number)
        .ok()
        .and_then(Position::from_square_number)
        .ok_or(MoveError::OutOfRange(number))
}
