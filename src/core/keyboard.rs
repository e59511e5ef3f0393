//! Keyboard status: the best-known mark for every letter in a round

use super::word::letter_index;
use super::{ALPHABET_SIZE, Mark, Turn};

/// Best-known feedback for each letter a-z
///
/// A letter's mark only ever improves: once seen as `Correct` it stays
/// `Correct`, even if a later guess uses it in a worse position.
/// Letters never guessed have no mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardStatus {
    keys: [Option<Mark>; ALPHABET_SIZE],
}

impl KeyboardStatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the status for a whole history
    #[must_use]
    pub fn from_history(history: &[Turn]) -> Self {
        let mut status = Self::new();
        for turn in history {
            status.record(turn);
        }
        status
    }

    /// Merge one turn into the status
    pub fn record(&mut self, turn: &Turn) {
        for (&letter, &mark) in turn.guess.letters().iter().zip(turn.feedback.marks()) {
            let key = &mut self.keys[letter_index(letter)];
            *key = (*key).max(Some(mark));
        }
    }

    /// Best-known mark for a letter, `None` if unguessed or not a-z
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Mark> {
        if letter.is_ascii_lowercase() {
            self.keys[letter_index(letter as u8)]
        } else {
            None
        }
    }

    /// Iterate over every letter a-z with its mark
    pub fn iter(&self) -> impl Iterator<Item = (char, Option<Mark>)> + '_ {
        ('a'..='z').zip(self.keys.iter().copied())
    }

    /// Number of letters with any feedback
    #[must_use]
    pub fn seen_count(&self) -> usize {
        self.keys.iter().filter(|key| key.is_some()).count()
    }
}
