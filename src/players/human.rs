//! Human player that reads square numbers from the terminal.

use super::{Player, Terminal};
use crate::GameError;
use crate::games::tictactoe::{Board, MoveError, Position, parse_square};
use tracing::{debug, instrument};

/// Prompt shown before every human move, numbers aligned under each other.
pub const MOVE_PROMPT: &str = "Choose your square: 1  2  3\n                    4  5  6\n                    7  8  9\n";

/// Human player typing square numbers.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Validates a typed line against the board.
    #[instrument(skip(board))]
    pub fn validate(input: &str, board: &Board) -> Result<Position, MoveError> {
        let pos = parse_square(input)?;
        if board.is_empty(pos) {
            Ok(pos)
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

impl Default for HumanPlayer {
    fn default() -> Self {
        Self::new("You")
    }
}

impl Player for HumanPlayer {
    /// Prompts until a legal, empty square is typed.
    ///
    /// There is no retry limit. Only end of input or an I/O failure gets
    /// out of the loop without a move.
    #[instrument(skip_all, fields(player = %self.name))]
    fn choose_move(
        &mut self,
        board: &Board,
        terminal: &mut dyn Terminal,
    ) -> Result<Position, GameError> {
        loop {
            let line = terminal
                .prompt(MOVE_PROMPT)?
                .ok_or(GameError::InputClosed)?;

            match Self::validate(&line, board) {
                Ok(pos) => {
                    debug!(position = %pos, "Human chose square");
                    return Ok(pos);
                }
                Err(err) => {
                    debug!(error = ?err, "Rejected human input");
                    terminal.write_line(&err.to_string())?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
