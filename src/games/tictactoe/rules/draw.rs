//! Draw detection logic for noughts and crosses.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is exhausted (no empty squares left).
///
/// This does not look at lines. Callers check for a win first.
#[instrument(skip(board))]
pub fn check_draw(board: &Board) -> bool {
    board.squares().all(|s| s != Square::Empty)
}
