//! Classifying raw player input
//!
//! Commands are matched first, so single-letter commands never reach word
//! validation.

use crate::core::{WORD_LENGTH, Word};
use crate::wordlists::Vocabulary;
use std::fmt;

/// Side-channel commands accepted at any guess prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Keyboard,
}

impl Command {
    /// Match a command keyword (`q`, `h`, `k`), ignoring case and surrounding whitespace
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "q" => Some(Self::Quit),
            "h" => Some(Self::Help),
            "k" => Some(Self::Keyboard),
            _ => None,
        }
    }

    #[must_use]
    pub const fn keyword(self) -> char {
        match self {
            Self::Quit => 'q',
            Self::Help => 'h',
            Self::Keyboard => 'k',
        }
    }
}

/// Answer to the play-again prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayChoice {
    Continue,
    Decline,
}

impl ReplayChoice {
    /// Parse `y`/`yes` or `n`/`no`, ignoring case and surrounding whitespace
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Some(Self::Continue),
            "n" | "no" => Some(Self::Decline),
            _ => None,
        }
    }
}

/// A validated line of input from the guess prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Guess(Word),
}

/// Why a line of input was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Not a command, and not 6 characters long
    WrongLength(usize),
    /// 6 characters, but not a known word
    UnknownWord(String),
    /// Neither yes nor no at the play-again prompt
    InvalidReplayChoice(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(_) => {
                write!(f, "Invalid! Guess must be of length {WORD_LENGTH}")
            }
            Self::UnknownWord(_) => write!(f, "Invalid! Unknown word"),
            Self::InvalidReplayChoice(_) => write!(f, "Please answer y or n"),
        }
    }
}

impl std::error::Error for InputError {}

/// Classify a line typed at the guess prompt
///
/// # Errors
///
/// Returns `InputError::WrongLength` for input that is neither a command nor
/// 6 characters, and `InputError::UnknownWord` for 6 characters that are not
/// a word in `vocabulary`.
pub fn parse_guess_input(raw: &str, vocabulary: &Vocabulary) -> Result<Input, InputError> {
    if let Some(command) = Command::parse(raw) {
        return Ok(Input::Command(command));
    }

    let text = raw.trim();
    let length = text.chars().count();
    if length != WORD_LENGTH {
        return Err(InputError::WrongLength(length));
    }

    match Word::new(text) {
        Ok(word) if vocabulary.contains(&word) => Ok(Input::Guess(word)),
        _ => Err(InputError::UnknownWord(text.to_lowercase())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn vocabulary() -> Vocabulary {
        Vocabulary::new(words_from_slice(&["garden"]), words_from_slice(&["planet"])).unwrap()
    }

    #[test]
    fn commands_are_case_insensitive() {
        assert_eq!(Command::parse("q"), Some(Command::Quit));
        assert_eq!(Command::parse("Q"), Some(Command::Quit));
        assert_eq!(Command::parse("h"), Some(Command::Help));
        assert_eq!(Command::parse("H"), Some(Command::Help));
        assert_eq!(Command::parse(" k\n"), Some(Command::Keyboard));
        assert_eq!(Command::parse("quit"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn command_keywords_round_trip() {
        for command in [Command::Quit, Command::Help, Command::Keyboard] {
            assert_eq!(Command::parse(&command.keyword().to_string()), Some(command));
        }
    }

    #[test]
    fn commands_win_over_word_validation() {
        let vocabulary = vocabulary();
        assert_eq!(
            parse_guess_input("K", &vocabulary),
            Ok(Input::Command(Command::Keyboard))
        );
    }

    #[test]
    fn known_word_is_a_guess() {
        let vocabulary = vocabulary();
        let input = parse_guess_input("Garden\n", &vocabulary).unwrap();
        assert_eq!(input, Input::Guess(Word::new("garden").unwrap()));
    }

    #[test]
    fn answers_are_valid_guesses() {
        let vocabulary = vocabulary();
        assert!(matches!(
            parse_guess_input("planet", &vocabulary),
            Ok(Input::Guess(_))
        ));
    }

    #[test]
    fn wrong_length_rejected() {
        let vocabulary = vocabulary();
        assert_eq!(
            parse_guess_input("plane", &vocabulary),
            Err(InputError::WrongLength(5))
        );
        assert_eq!(
            parse_guess_input("planets", &vocabulary),
            Err(InputError::WrongLength(7))
        );
        assert_eq!(parse_guess_input("", &vocabulary), Err(InputError::WrongLength(0)));
    }

    #[test]
    fn unknown_six_letter_word_rejected() {
        let vocabulary = vocabulary();
        assert_eq!(
            parse_guess_input("xxxxxx", &vocabulary),
            Err(InputError::UnknownWord("xxxxxx".to_string()))
        );
    }

    #[test]
    fn six_characters_with_digits_is_unknown_word() {
        let vocabulary = vocabulary();
        assert!(matches!(
            parse_guess_input("gard3n", &vocabulary),
            Err(InputError::UnknownWord(_))
        ));
    }

    #[test]
    fn replay_choice_parsing() {
        assert_eq!(ReplayChoice::parse("y"), Some(ReplayChoice::Continue));
        assert_eq!(ReplayChoice::parse("YES"), Some(ReplayChoice::Continue));
        assert_eq!(ReplayChoice::parse("n"), Some(ReplayChoice::Decline));
        assert_eq!(ReplayChoice::parse(" No "), Some(ReplayChoice::Decline));
        assert_eq!(ReplayChoice::parse(""), None);
        assert_eq!(ReplayChoice::parse("maybe"), None);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            InputError::WrongLength(3).to_string(),
            "Invalid! Guess must be of length 6"
        );
        assert_eq!(
            InputError::UnknownWord("xxxxxx".into()).to_string(),
            "Invalid! Unknown word"
        );
    }
}
