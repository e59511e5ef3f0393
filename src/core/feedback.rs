//! Guess evaluation and per-letter feedback
//!
//! Feedback holds one [`Mark`] per letter position:
//! - Correct: letter is in the secret at this position
//! - Misplaced: letter is in the secret, but elsewhere
//! - Incorrect: letter is not in the secret (or all its occurrences are used up)

use super::word::letter_index;
use super::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter position
///
/// Ordered by how much it reveals: `Incorrect < Misplaced < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Incorrect,
    Misplaced,
    Correct,
}

impl Mark {
    /// Single ASCII character code (`G`, `Y`, `-`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Misplaced => 'Y',
            Self::Incorrect => '-',
        }
    }

    /// Square symbol used on the board
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Incorrect => '⬛',
        }
    }

    /// Parse a mark from its code or symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for misplaced
    /// - '-'/'_'/⬛/⬜ for incorrect
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Misplaced),
            '-' | '_' | '⬛' | '⬜' => Some(Self::Incorrect),
            _ => None,
        }
    }
}

/// Feedback for a whole guess, one mark per letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// Every letter in the right place
    pub const SOLVED: Self = Self([Mark::Correct; WORD_LENGTH]);

    /// Evaluate `guess` against `secret`
    ///
    /// Implements the feedback rules including duplicate letters: each letter
    /// occurrence in the secret backs at most one `Correct` or `Misplaced` mark.
    ///
    /// # Algorithm
    /// 1. Count the letters of the secret into a 26-slot pool
    /// 2. First pass: mark exact position matches and take them out of the pool
    /// 3. Second pass, left to right: mark a letter misplaced while the pool
    ///    still holds an occurrence of it, consuming that occurrence
    ///
    /// # Examples
    /// ```
    /// use hexordle::core::{Feedback, Word};
    ///
    /// let guess = Word::new("eeeeee").unwrap();
    /// let secret = Word::new("teeter").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &secret);
    ///
    /// assert_eq!(feedback.codes(), "-GG-G-");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        let mut marks = [Mark::Incorrect; WORD_LENGTH];
        let mut remaining = secret.letter_counts();

        for ((mark, &g), &s) in marks.iter_mut().zip(guess.letters()).zip(secret.letters()) {
            if g == s {
                *mark = Mark::Correct;
                remaining[letter_index(g)] -= 1;
            }
        }

        for (mark, &g) in marks.iter_mut().zip(guess.letters()) {
            if *mark == Mark::Correct {
                continue;
            }
            let count = &mut remaining[letter_index(g)];
            if *count > 0 {
                *mark = Mark::Misplaced;
                *count -= 1;
            }
        }

        Self(marks)
    }

    /// Build feedback from explicit marks
    #[must_use]
    pub const fn from_marks(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Parse feedback from a string like "GY-G-Y" or "🟩🟨⬛🟩⬛🟨"
    #[must_use]
    pub fn from_codes(s: &str) -> Option<Self> {
        let mut marks = [Mark::Incorrect; WORD_LENGTH];
        let mut chars = s.chars();

        for mark in &mut marks {
            *mark = Mark::from_char(chars.next()?)?;
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self(marks))
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Count the positions carrying a given mark
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// ASCII code string, one character per position
    #[must_use]
    pub fn codes(&self) -> String {
        self.0.iter().map(|m| m.code()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_codes(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

/// Check whether a guess wins the round
#[must_use]
pub fn won(guess: &Word, secret: &Word) -> bool {
    guess == secret
}

/// One guess together with the feedback it received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
}

impl Turn {
    /// Evaluate `guess` against `secret` and pair it with the result
    #[must_use]
    pub fn evaluate(guess: Word, secret: &Word) -> Self {
        Self {
            guess,
            feedback: Feedback::evaluate(&guess, secret),
        }
    }
}
