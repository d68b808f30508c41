//! Main menu choices.

use std::str::FromStr;
use strum::EnumString;
use tracing::instrument;

/// Menu text shown before every choice.
pub const MENU: &str = "\
Enter one of the following options:
1 - Play the game
2 - Save score in file 'leaderboard.txt'
3 - Load and display the scores from the file 'leaderboard.txt'
q - End the program
";

/// Prompt for the menu answer.
pub const MENU_PROMPT: &str = "1, 2, 3 or q? ";

/// An accepted menu answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum MenuChoice {
    /// Play one round.
    #[strum(serialize = "1")]
    Play,
    /// Save the running total under a name.
    #[strum(serialize = "2")]
    SaveScore,
    /// Load and print the leaderboard.
    #[strum(serialize = "3")]
    ShowLeaderboard,
    /// Leave the program.
    #[strum(serialize = "q")]
    Quit,
}

impl MenuChoice {
    /// Parses a typed answer, ignoring case and surrounding whitespace.
    #[instrument]
    pub fn parse(input: &str) -> Option<Self> {
        Self::from_str(input.trim()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_the_four_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Play));
        assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::SaveScore));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::ShowLeaderboard));
        assert_eq!(MenuChoice::parse("q"), Some(MenuChoice::Quit));
    }

    #[test]
    fn test_quit_is_case_insensitive() {
        assert_eq!(MenuChoice::parse("Q"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse(" q \n"), Some(MenuChoice::Quit));
    }

    #[test]
    fn test_rejects_everything_else() {
        for input in ["5", "", "play", "12", "quit"] {
            assert_eq!(MenuChoice::parse(input), None, "{input:?} should be rejected");
        }
    }
}
