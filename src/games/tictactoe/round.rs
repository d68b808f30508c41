//! One round of noughts and crosses, human against computer.
//!
//! The human always opens and the sides strictly alternate. Every placement
//! is checked for a win by the side that just moved, then for a full board,
//! and only then does the turn pass.

use super::action::{Move, MoveError};
use super::rules::{check_draw, check_win};
use super::{Board, Mark, Position, Square};
use crate::GameError;
use crate::players::{Player, Terminal};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Terminal result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The human completed a line.
    HumanWin,
    /// The computer completed a line.
    ComputerWin,
    /// The board filled up with no line.
    Draw,
}

impl RoundOutcome {
    /// Signed score for the round: +1, -1 or 0.
    pub fn score(self) -> i64 {
        match self {
            RoundOutcome::HumanWin => 1,
            RoundOutcome::ComputerWin => -1,
            RoundOutcome::Draw => 0,
        }
    }

    /// Announcement shown when the round ends.
    pub fn message(self) -> &'static str {
        match self {
            RoundOutcome::HumanWin => "Congratulations, you win!!",
            RoundOutcome::ComputerWin => "Computer wins this game!!",
            RoundOutcome::Draw => "It's a draw match!",
        }
    }

    fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::Player => RoundOutcome::HumanWin,
            Mark::Computer => RoundOutcome::ComputerWin,
        }
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::HumanWin => write!(f, "Human wins"),
            RoundOutcome::ComputerWin => write!(f, "Computer wins"),
            RoundOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Where the round stands between placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the human's square.
    AwaitingHumanMove,
    /// Waiting for the computer's square.
    AwaitingComputerMove,
    /// The round ended.
    Finished(RoundOutcome),
}

impl Phase {
    /// Mark that moves next, if the round is still running.
    pub fn to_move(self) -> Option<Mark> {
        match self {
            Phase::AwaitingHumanMove => Some(Mark::Player),
            Phase::AwaitingComputerMove => Some(Mark::Computer),
            Phase::Finished(_) => None,
        }
    }

    fn awaiting(mark: Mark) -> Self {
        match mark {
            Mark::Player => Phase::AwaitingHumanMove,
            Mark::Computer => Phase::AwaitingComputerMove,
        }
    }
}

/// A round in progress on a borrowed board.
#[derive(Debug)]
pub struct Round<'a> {
    board: &'a mut Board,
    phase: Phase,
    history: Vec<Move>,
}

impl<'a> Round<'a> {
    /// Resets `board` and starts a round with the human to move.
    #[instrument(skip(board))]
    pub fn start(board: &'a mut Board) -> Self {
        board.reset();
        Self {
            board,
            phase: Phase::AwaitingHumanMove,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &*self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the outcome once the round is over.
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Places the mark of the side to move and advances the phase.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::RoundOver`] once finished and
    /// [`MoveError::SquareOccupied`] for a taken square. The round is left
    /// untouched in both cases.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn place(&mut self, pos: Position) -> Result<Phase, MoveError> {
        let mark = self.phase.to_move().ok_or(MoveError::RoundOver)?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(mark));
        self.history.push(Move::new(mark, pos));

        self.phase = if check_win(self.board, mark) {
            Phase::Finished(RoundOutcome::won_by(mark))
        } else if check_draw(self.board) {
            Phase::Finished(RoundOutcome::Draw)
        } else {
            Phase::awaiting(mark.opponent())
        };

        debug!(mark = ?mark, position = %pos, next = ?self.phase, "Mark placed");
        Ok(self.phase)
    }
}

/// Plays a full round and returns its outcome.
///
/// Shows the numbered layout first, then redraws the board after every
/// placement and announces the result. The leaderboard is not touched.
///
/// # Errors
///
/// Propagates terminal failures and end of input from the human, and
/// [`GameError::Rejected`] if a player offers an occupied square.
#[instrument(skip_all, fields(human = %human.name(), computer = %computer.name()))]
pub fn play_round(
    board: &mut Board,
    human: &mut dyn Player,
    computer: &mut dyn Player,
    terminal: &mut dyn Terminal,
) -> Result<RoundOutcome, GameError> {
    let mut round = Round::start(board);
    terminal.write(&round.board().render_numbered())?;

    loop {
        let pos = match round.phase() {
            Phase::AwaitingHumanMove => human.choose_move(round.board(), terminal)?,
            Phase::AwaitingComputerMove => computer.choose_move(round.board(), terminal)?,
            Phase::Finished(outcome) => return Ok(outcome),
        };

        let phase = round.place(pos).map_err(GameError::Rejected)?;
        terminal.write(&round.board().render())?;

        if let Phase::Finished(outcome) = phase {
            info!(%outcome, moves = round.history().len(), "Round finished");
            terminal.write_line(outcome.message())?;
            return Ok(outcome);
        }
    }
}
