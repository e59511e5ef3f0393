//! Hexordle
//!
//! A six-letter word guessing game: find the hidden word in six tries, guided
//! by per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use hexordle::core::{Feedback, Word};
//!
//! let guess = Word::new("garden").unwrap();
//! let secret = Word::new("planet").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &secret);
//! assert_eq!(feedback.codes(), "-Y--GY");
//! ```

// Core domain types
pub mod core;

// Game rules, rounds and statistics
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
