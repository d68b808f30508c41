//! Core domain types for noughts and crosses.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side that owns a mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The human player's mark (always moves first).
    Player,
    /// The computer's mark.
    Computer,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Player => Mark::Computer,
            Mark::Computer => Mark::Player,
        }
    }

    /// Symbol drawn on the board for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Computer => 'O',
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here yet.
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

/// Border drawn above and below every row.
const BORDER: &str = " -----------";

/// Fixed 3x3 grid addressed by (row, column).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Square; 3]; 3],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Square::Empty; 3]; 3],
        }
    }

    /// Clears every cell back to [`Square::Empty`].
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [[Square::Empty; 3]; 3];
    }

    /// Returns the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        let (row, column) = pos.coordinates();
        self.cells[row][column]
    }

    /// Overwrites the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        let (row, column) = pos.coordinates();
        self.cells[row][column] = square;
    }

    /// Checks whether the square at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> &[[Square; 3]; 3] {
        &self.cells
    }

    /// Iterates over every square in reading order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Renders the board with blank empty cells.
    pub fn render(&self) -> String {
        self.render_with(|_| ' ')
    }

    /// Renders the board with each empty cell showing its square number.
    ///
    /// Used for the welcome screen and at the start of every round so the
    /// player can see which number selects which square.
    pub fn render_numbered(&self) -> String {
        self.render_with(|pos| {
            char::from_digit(u32::from(pos.square_number()), 10).unwrap_or('?')
        })
    }

    fn render_with(&self, empty: impl Fn(Position) -> char) -> String {
        let mut out = String::new();
        out.push_str(BORDER);
        out.push('\n');
        for (row, cells) in self.cells.iter().enumerate() {
            let symbols: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(column, square)| match square {
                    Square::Occupied(mark) => mark.symbol().to_string(),
                    Square::Empty => Position::from_coordinates(row, column)
                        .map(&empty)
                        .unwrap_or(' ')
                        .to_string(),
                })
                .collect();
            out.push_str("| ");
            out.push_str(&symbols.join(" | "));
            out.push_str(" |\n");
            out.push_str(BORDER);
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
