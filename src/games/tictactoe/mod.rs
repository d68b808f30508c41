//! Noughts and crosses: board, rules and the round state machine.

mod action;
mod position;
mod round;
mod rules;
mod types;

pub use action::{Move, MoveError, parse_square};
pub use position::{Position, square_to_coordinates};
pub use round::{Phase, Round, RoundOutcome, play_round};
pub use rules::{LINES, check_draw, check_win};
pub use types::{Board, Mark, Square};
