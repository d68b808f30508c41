//! Unbeatable Noughts and Crosses - terminal game library
//!
//! A human plays noughts and crosses against a computer that picks empty
//! squares at random. Round scores accumulate over a session and can be
//! saved to a JSON leaderboard file.
//!
//! # Architecture
//!
//! - **Games**: board, square numbering, win/draw rules and the round state machine
//! - **Players**: human (terminal input) and computer (random) move providers
//! - **Leaderboard**: file-backed name to cumulative score store
//! - **Session**: the menu loop tying it together
//!
//! # Example
//!
//! ```no_run
//! use noughts_and_crosses::{ComputerPlayer, Console, HumanPlayer, LeaderboardStore, Session};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn example() -> Result<(), noughts_and_crosses::GameError> {
//! let terminal = Console::new(std::io::stdin().lock(), std::io::stdout());
//! let computer = ComputerPlayer::new("Computer", StdRng::seed_from_u64(7));
//! let mut session = Session::new(
//!     terminal,
//!     HumanPlayer::default(),
//!     computer,
//!     LeaderboardStore::default(),
//! );
//! session.run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod games;
mod leaderboard;
mod menu;
mod players;
mod session;

// Crate-level exports - Errors
pub use error::GameError;

// Crate-level exports - Game types
pub use games::tictactoe::{
    Board, LINES, Mark, Move, MoveError, Phase, Position, Round, RoundOutcome, Square,
    check_draw, check_win, parse_square, play_round, square_to_coordinates,
};

// Crate-level exports - Players
pub use players::{ComputerPlayer, Console, HumanPlayer, MOVE_PROMPT, Player, Terminal};

// Crate-level exports - Leaderboard
pub use leaderboard::{DEFAULT_LEADERBOARD_PATH, Leaderboard, LeaderboardError, LeaderboardStore};

// Crate-level exports - Session
pub use menu::{MENU, MENU_PROMPT, MenuChoice};
pub use session::{FAREWELL, NAME_PROMPT, Session, WELCOME};
