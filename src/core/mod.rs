//! Core domain types for Hexordle
//!
//! Words, per-letter feedback and keyboard status. Everything here is pure
//! and free of I/O.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, Mark, Turn, won};
pub use keyboard::KeyboardStatus;
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 6;

/// Number of guesses the player gets per round
pub const MAX_GUESSES: usize = 6;

/// Size of the alphabet words are drawn from (a-z)
pub const ALPHABET_SIZE: usize = 26;
