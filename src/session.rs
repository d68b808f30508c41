//! Menu-driven play session.
//!
//! A session spans one program run. It keeps a running score across rounds
//! until the player saves it under a name, which also resets it.

use crate::GameError;
use crate::games::tictactoe::{Board, RoundOutcome, play_round};
use crate::leaderboard::LeaderboardStore;
use crate::menu::{MENU, MENU_PROMPT, MenuChoice};
use crate::players::{Player, Terminal};
use tracing::{debug, info, instrument, warn};

/// Printed once when the session opens.
pub const WELCOME: &str = "Welcome to the \"Unbeatable Noughts and Crosses\" game.\nThe board layout is shown below:\n";

/// Printed when the player quits.
pub const FAREWELL: &str = "Thank you for playing the 'Unbeatable Noughts and Crosses' game.\nGood Bye\n";

/// Prompt for the name a score is saved under.
pub const NAME_PROMPT: &str = "Enter your name for leaderboard: ";

/// One program run: a terminal, two players, a leaderboard and a running total.
#[derive(Debug)]
pub struct Session<T, H, C> {
    terminal: T,
    human: H,
    computer: C,
    store: LeaderboardStore,
    board: Board,
    running_total: i64,
}

impl<T: Terminal, H: Player, C: Player> Session<T, H, C> {
    /// Creates a session with a zero running total.
    pub fn new(terminal: T, human: H, computer: C, store: LeaderboardStore) -> Self {
        Self {
            terminal,
            human,
            computer,
            store,
            board: Board::new(),
            running_total: 0,
        }
    }

    /// Unsaved score accumulated since the session began or last saved.
    pub fn running_total(&self) -> i64 {
        self.running_total
    }

    /// Consumes the session, returning its terminal.
    pub fn into_terminal(self) -> T {
        self.terminal
    }

    /// Runs the menu loop until the player quits or input ends.
    ///
    /// End of input at the menu ends the session quietly. An unsaved
    /// running total is dropped either way.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] on terminal failure, or if input ends in the
    /// middle of a round or a name prompt.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), GameError> {
        self.welcome()?;

        while let Some(choice) = self.menu()? {
            debug!(?choice, "Menu choice");
            match choice {
                MenuChoice::Play => {
                    self.play()?;
                }
                MenuChoice::SaveScore => self.save_score()?,
                MenuChoice::ShowLeaderboard => self.show_leaderboard()?,
                MenuChoice::Quit => {
                    if self.running_total != 0 {
                        info!(discarded = self.running_total, "Quitting with unsaved score");
                    }
                    self.terminal.write(FAREWELL)?;
                    return Ok(());
                }
            }
        }

        info!("Input ended at the menu");
        Ok(())
    }

    /// Shows the welcome text and the numbered layout.
    pub fn welcome(&mut self) -> Result<(), GameError> {
        self.terminal.write(WELCOME)?;
        self.terminal.write(&self.board.render_numbered())
    }

    /// Asks for a menu choice until a valid one arrives.
    ///
    /// Returns `None` at end of input.
    #[instrument(skip(self))]
    pub fn menu(&mut self) -> Result<Option<MenuChoice>, GameError> {
        loop {
            self.terminal.write(MENU)?;
            let Some(line) = self.terminal.prompt(MENU_PROMPT)? else {
                return Ok(None);
            };
            match MenuChoice::parse(&line) {
                Some(choice) => return Ok(Some(choice)),
                None => {
                    debug!(input = %line, "Rejected menu input");
                    self.terminal.write_line("Invalid choice. Please try again!")?;
                }
            }
        }
    }

    /// Plays one round and adds its score to the running total.
    #[instrument(skip(self), fields(total = self.running_total))]
    pub fn play(&mut self) -> Result<RoundOutcome, GameError> {
        let outcome = play_round(
            &mut self.board,
            &mut self.human,
            &mut self.computer,
            &mut self.terminal,
        )?;
        self.running_total += outcome.score();
        info!(%outcome, total = self.running_total, "Round scored");
        self.terminal
            .write_line(&format!("Your current score is: {}", self.running_total))?;
        Ok(outcome)
    }

    /// Saves the running total under a prompted name, then resets it.
    ///
    /// A storage failure is reported to the player and the total is kept.
    #[instrument(skip(self), fields(total = self.running_total))]
    pub fn save_score(&mut self) -> Result<(), GameError> {
        let name = self.prompt_name()?;
        match self.store.save(&name, self.running_total) {
            Ok(leaderboard) => {
                let total = leaderboard.get(&name).unwrap_or(self.running_total);
                self.running_total = 0;
                self.terminal
                    .write_line(&format!("Score saved. {} now has {} point(s).", name, total))
            }
            Err(err) => {
                warn!(error = %err, "Saving score failed");
                self.terminal
                    .write_line(&format!("Could not save score: {}", err.message))
            }
        }
    }

    /// Loads and prints the leaderboard.
    ///
    /// A storage failure is reported to the player.
    #[instrument(skip(self))]
    pub fn show_leaderboard(&mut self) -> Result<(), GameError> {
        match self.store.load() {
            Ok(leaderboard) => self.terminal.write(&leaderboard.render()),
            Err(err) => {
                warn!(error = %err, "Loading leaderboard failed");
                self.terminal
                    .write_line(&format!("Could not load leaderboard: {}", err.message))
            }
        }
    }

    fn prompt_name(&mut self) -> Result<String, GameError> {
        loop {
            let name = self
                .terminal
                .prompt(NAME_PROMPT)?
                .ok_or(GameError::InputClosed)?;
            let name = name.trim();
            if !name.is_empty() {
                return Ok(name.to_string());
            }
            self.terminal.write_line("Please enter a name.")?;
        }
    }
}
