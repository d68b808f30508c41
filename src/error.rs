//! Errors that end a round or a session.

use crate::games::tictactoe::MoveError;
use derive_more::{Display, Error};

/// Failure that aborts the current round or prompt.
///
/// Input mistakes never surface here; the human player recovers from those
/// by prompting again.
#[derive(Debug, Display, Error)]
pub enum GameError {
    /// Reading from or writing to the terminal failed.
    #[display("Terminal I/O error: {}", _0)]
    Io(std::io::Error),

    /// The input stream ended while a line was expected.
    #[display("Input closed before a line was read")]
    InputClosed,

    /// A player offered a square the round refused.
    #[display("Move rejected: {}", _0)]
    Rejected(MoveError),

    /// The computer was asked to move on a full board.
    #[display("No empty square left to play")]
    NoEmptySquare,
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
