//! Terminal output formatting
//!
//! Display utilities for the text-mode game and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    HELP_TEXT, print_history, print_keyboard, print_loss, print_stats, print_win,
};
