//! Secret word selection

use crate::core::Word;
use crate::wordlists::VocabularyError;
use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks the secret word for each round
pub trait SecretChooser {
    /// Choose the secret for the next round
    fn choose(&mut self) -> Word;
}

/// Uniform random choice from the answer list
///
/// With `no_repeat`, a chosen word is set aside until every answer has been
/// used once, then the pool refills.
#[derive(Debug, Clone)]
pub struct RandomChooser<R: Rng = StdRng> {
    answers: Vec<Word>,
    pool: Vec<Word>,
    no_repeat: bool,
    rng: R,
}

impl RandomChooser<StdRng> {
    /// Chooser seeded from the operating system
    ///
    /// # Errors
    ///
    /// Returns `VocabularyError::NoAnswers` if `answers` is empty.
    pub fn from_os_rng(answers: Vec<Word>) -> Result<Self, VocabularyError> {
        Self::with_rng(answers, StdRng::from_os_rng())
    }

    /// Chooser with a fixed seed, for reproducible sessions
    ///
    /// # Errors
    ///
    /// Returns `VocabularyError::NoAnswers` if `answers` is empty.
    pub fn seeded(answers: Vec<Word>, seed: u64) -> Result<Self, VocabularyError> {
        Self::with_rng(answers, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomChooser<R> {
    /// Chooser drawing from `answers` with the given RNG
    ///
    /// # Errors
    ///
    /// Returns `VocabularyError::NoAnswers` if `answers` is empty.
    pub fn with_rng(answers: Vec<Word>, rng: R) -> Result<Self, VocabularyError> {
        if answers.is_empty() {
            return Err(VocabularyError::NoAnswers);
        }

        Ok(Self {
            pool: answers.clone(),
            answers,
            no_repeat: false,
            rng,
        })
    }

    /// Avoid repeating a secret until all answers have been played
    #[must_use]
    pub fn no_repeat(mut self, enabled: bool) -> Self {
        self.no_repeat = enabled;
        self
    }

    /// Words still available before the pool refills
    #[must_use]
    pub fn remaining(&self) -> usize {
        if self.no_repeat {
            self.pool.len()
        } else {
            self.answers.len()
        }
    }
}

impl<R: Rng> SecretChooser for RandomChooser<R> {
    fn choose(&mut self) -> Word {
        if !self.no_repeat {
            return self.answers[self.rng.random_range(0..self.answers.len())];
        }

        if self.pool.is_empty() {
            trace!("Every answer used, refilling the secret pool");
            self.pool.clone_from(&self.answers);
        }
        let index = self.rng.random_range(0..self.pool.len());
        self.pool.swap_remove(index)
    }
}

/// Cycles through a fixed list of secrets in order
///
/// Handy for scripted sessions and tests.
#[derive(Debug, Clone)]
pub struct SequenceChooser {
    secrets: Vec<Word>,
    next: usize,
}

impl SequenceChooser {
    /// # Errors
    ///
    /// Returns `VocabularyError::NoAnswers` if `secrets` is empty.
    pub fn new(secrets: Vec<Word>) -> Result<Self, VocabularyError> {
        if secrets.is_empty() {
            return Err(VocabularyError::NoAnswers);
        }
        Ok(Self { secrets, next: 0 })
    }
}

impl SecretChooser for SequenceChooser {
    fn choose(&mut self) -> Word {
        let secret = self.secrets[self.next % self.secrets.len()];
        self.next += 1;
        secret
    }
}
