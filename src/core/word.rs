//! Hexordle word representation
//!
//! A Word stores a validated 6-letter lowercase word as a fixed byte array.

use super::{ALPHABET_SIZE, WORD_LENGTH};
use std::fmt;

/// A 6-letter word, either a secret or a guess
///
/// Only lowercase ASCII letters are representable, so every `Word` has
/// exactly [`WORD_LENGTH`] letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    letters: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 6 characters
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hexordle::core::Word;
    ///
    /// let word = Word::new("Planet").unwrap();
    /// assert_eq!(word.as_str(), "planet");
    ///
    /// assert!(Word::new("plan").is_err());
    /// assert!(Word::new("pl4net").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let length = text.chars().count();
        if length != WORD_LENGTH {
            return Err(WordError::InvalidLength(length));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, byte) in letters.iter_mut().zip(text.bytes()) {
            if !byte.is_ascii_alphabetic() {
                return Err(WordError::InvalidCharacters);
            }
            *slot = byte.to_ascii_lowercase();
        }

        Ok(Self { letters })
    }

    /// Get the word as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.letters).expect("words hold ASCII letters only")
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-5)
    ///
    /// # Panics
    /// Panics if position >= 6
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Count how often each letter a-z occurs in the word
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &letter in &self.letters {
            counts[letter_index(letter)] += 1;
        }
        counts
    }
}

/// Map a lowercase ASCII letter to its 0-25 alphabet index
#[inline]
#[must_use]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("planet").unwrap();
        assert_eq!(word.as_str(), "planet");
        assert_eq!(word.letters(), b"planet");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("PLANET").unwrap();
        assert_eq!(word.as_str(), "planet");

        let word2 = Word::new("PlAnEt").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("planets"),
            Err(WordError::InvalidLength(7))
        ));
        assert!(matches!(
            Word::new("plane"),
            Err(WordError::InvalidLength(5))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        // Six characters, but not ASCII
        assert_eq!(Word::new("plänet"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("plan3t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("plan t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("plan!t"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("planet").unwrap();
        assert_eq!(word.letter_at(0), b'p');
        assert_eq!(word.letter_at(3), b'n');
        assert_eq!(word.letter_at(5), b't');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("planet").unwrap();
        assert!(word.has_letter(b'p'));
        assert!(word.has_letter(b't'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let word = Word::new("teeter").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts[letter_index(b't')], 2);
        assert_eq!(counts[letter_index(b'e')], 3);
        assert_eq!(counts[letter_index(b'r')], 1);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 6);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Garden".parse().unwrap();
        assert_eq!(format!("{word}"), "garden");
    }

    #[test]
    fn word_error_messages() {
        assert_eq!(
            WordError::InvalidLength(4).to_string(),
            "Word must be exactly 6 letters, got 4"
        );
    }
}
