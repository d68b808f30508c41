//! Computer player that picks uniformly among empty squares.
//!
//! The game calls itself unbeatable, but this player has no lookahead at
//! all: it draws a row and a column at random and tries again until the
//! cell is free.

use super::{Player, Terminal};
use crate::GameError;
use crate::games::tictactoe::{Board, Position, check_draw};
use rand::Rng;
use tracing::{debug, instrument, trace};

/// Random computer opponent owning its random source.
#[derive(Debug)]
pub struct ComputerPlayer<R> {
    name: String,
    rng: R,
}

impl<R: Rng> ComputerPlayer<R> {
    /// Creates a computer player drawing from `rng`.
    pub fn new(name: impl Into<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }

    /// Rejection-samples (row, column) until an empty cell comes up.
    #[instrument(skip_all, fields(player = %self.name))]
    pub fn pick(&mut self, board: &Board) -> Result<Position, GameError> {
        if check_draw(board) {
            return Err(GameError::NoEmptySquare);
        }

        let mut attempts = 0u32;
        loop {
            attempts += 1;
            let row = self.rng.random_range(0..3);
            let column = self.rng.random_range(0..3);
            let Some(pos) = Position::from_coordinates(row, column) else {
                continue;
            };
            if board.is_empty(pos) {
                debug!(position = %pos, attempts, "Computer chose square");
                return Ok(pos);
            }
            trace!(row, column, "Cell taken, drawing again");
        }
    }
}

impl<R: Rng> Player for ComputerPlayer<R> {
    fn choose_move(
        &mut self,
        board: &Board,
        _terminal: &mut dyn Terminal,
    ) -> Result<Position, GameError> {
        self.pick(board)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
