//! Move providers and the terminal they talk through.

mod computer;
mod human;
mod terminal;

pub use computer::ComputerPlayer;
pub use human::{HumanPlayer, MOVE_PROMPT};
pub use terminal::{Console, Terminal};

use crate::GameError;
use crate::games::tictactoe::{Board, Position};

/// Anything that can choose the next square for its side.
pub trait Player {
    /// Picks an empty square on `board`.
    ///
    /// Implementations must only return positions that are empty on the
    /// board they were given.
    fn choose_move(
        &mut self,
        board: &Board,
        terminal: &mut dyn Terminal,
    ) -> Result<Position, GameError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
