//! Shared helpers for integration tests.

#![allow(dead_code)]

use noughts_and_crosses::{Board, Console, GameError, Player, Position, Terminal};
use std::collections::VecDeque;
use std::io::Cursor;

/// Player that plays a fixed list of squares in order.
pub struct ScriptedPlayer {
    name: String,
    moves: VecDeque<Position>,
}

impl ScriptedPlayer {
    pub fn new(moves: impl IntoIterator<Item = Position>) -> Self {
        Self {
            name: "Scripted".to_string(),
            moves: moves.into_iter().collect(),
        }
    }
}

impl Player for ScriptedPlayer {
    fn choose_move(
        &mut self,
        _board: &Board,
        _terminal: &mut dyn Terminal,
    ) -> Result<Position, GameError> {
        self.moves.pop_front().ok_or(GameError::NoEmptySquare)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Console fed from a fixed script of input lines.
pub fn scripted_console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

/// Everything written to a scripted console.
pub fn output_of(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).expect("Output not UTF-8")
}
