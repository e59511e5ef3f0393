//! State of the round in progress

use crate::core::{KeyboardStatus, MAX_GUESSES, Turn, Word};

/// The current round: secret, attempt counter and guess history
///
/// The counter starts at 1 and names the attempt about to be made.
#[derive(Debug, Clone)]
pub struct Session {
    secret: Word,
    guess_number: usize,
    history: Vec<Turn>,
}

impl Session {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            guess_number: 1,
            history: Vec::with_capacity(MAX_GUESSES),
        }
    }

    /// Evaluate a guess, append it to the history and advance the counter
    ///
    /// The guess must already be validated against the vocabulary.
    pub fn record_guess(&mut self, guess: Word) -> Turn {
        debug_assert!(
            !self.is_won() && !self.is_lost(),
            "guess recorded after the round ended"
        );

        let turn = Turn::evaluate(guess, &self.secret);
        self.history.push(turn);
        self.guess_number += 1;
        turn
    }

    /// Start over with a new secret
    pub fn reset(&mut self, secret: Word) {
        self.secret = secret;
        self.guess_number = 1;
        self.history.clear();
    }

    /// True if the latest guess was the secret
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.history
            .last()
            .is_some_and(|turn| turn.guess == self.secret)
    }

    /// True once every attempt is used without a win
    #[must_use]
    pub fn is_lost(&self) -> bool {
        !self.is_won() && self.guess_number > MAX_GUESSES
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    /// Attempt number about to be made (1-based)
    #[must_use]
    pub const fn guess_number(&self) -> usize {
        self.guess_number
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.history.len())
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Best-known mark of every letter guessed this round
    #[must_use]
    pub fn keyboard(&self) -> KeyboardStatus {
        KeyboardStatus::from_history(&self.history)
    }
}
