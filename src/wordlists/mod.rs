//! Word lists for Hexordle
//!
//! Provides embedded word lists compiled into the binary for zero-cost access,
//! and the [`Vocabulary`] the game validates guesses against.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use loader::words_from_slice;
use rustc_hash::FxHashSet;
use std::fmt;

/// Error type for unusable word lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    NoAnswers,
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAnswers => write!(f, "Answer list contains no valid 6-letter words"),
        }
    }
}

impl std::error::Error for VocabularyError {}

/// The words a session plays with
///
/// - guesses: every word the player may enter
/// - answers: words that may be chosen as the secret
///
/// Answers are always valid guesses, so every round is winnable.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    guesses: FxHashSet<Word>,
    answers: Vec<Word>,
}

impl Vocabulary {
    /// Create a vocabulary from guess and answer lists
    ///
    /// # Errors
    ///
    /// Returns `VocabularyError::NoAnswers` if `answers` is empty.
    pub fn new(guesses: Vec<Word>, answers: Vec<Word>) -> Result<Self, VocabularyError> {
        if answers.is_empty() {
            return Err(VocabularyError::NoAnswers);
        }

        let mut guess_set: FxHashSet<Word> = guesses.into_iter().collect();
        guess_set.extend(answers.iter().copied());

        Ok(Self {
            guesses: guess_set,
            answers,
        })
    }

    /// Vocabulary built from the embedded word lists
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded answer list is empty.
    pub fn embedded() -> Result<Self, VocabularyError> {
        Self::new(words_from_slice(ALLOWED), words_from_slice(ANSWERS))
    }

    /// Check if a word may be guessed
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.guesses.contains(word)
    }

    /// Words that can be the secret
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }
}
