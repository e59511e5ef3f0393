//! Formatting utilities for terminal output

use crate::core::{Mark, Word};
use colored::{ColoredString, Colorize};

/// Spread a word's letters out so they line up over their feedback squares
#[must_use]
pub fn spaced_letters(word: &Word) -> String {
    let mut result = String::with_capacity(word.letters().len() * 2);
    for (i, ch) in word.as_str().chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result
}

/// A letter tile coloured by its mark
///
/// Unmarked letters are left plain.
#[must_use]
pub fn letter_tile(letter: char, mark: Option<Mark>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match mark {
        Some(Mark::Correct) => text.black().on_green().bold(),
        Some(Mark::Misplaced) => text.black().on_yellow().bold(),
        Some(Mark::Incorrect) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Symbol for a keyboard entry, blank for letters not yet guessed
#[must_use]
pub fn mark_symbol(mark: Option<Mark>) -> char {
    mark.map_or(' ', Mark::symbol)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
