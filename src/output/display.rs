//! Display functions for the text-mode game

use super::formatters::{create_progress_bar, letter_tile, mark_symbol, spaced_letters};
use crate::core::{KeyboardStatus, Turn, Word};
use crate::game::Statistics;
use colored::Colorize;
use std::io::{self, Write};

/// Static help shown for the `h` command
pub const HELP_TEXT: &str = "\
Guess the hidden 6-letter word in 6 tries.
After each guess every letter is marked:
  🟩  right letter, right place
  🟨  in the word, but somewhere else
  ⬛  not in the word (or no more copies of it)
Commands: h = help, k = keyboard status, q = quit";

const RULE_WIDTH: usize = 15;
const ROW_INDENT: usize = 10;

/// Print every guess of the round with its feedback underneath
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_history<W: Write>(out: &mut W, history: &[Turn]) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for (i, turn) in history.iter().enumerate() {
        let label = format!("Guess {}:", i + 1);
        writeln!(out, "{label:<ROW_INDENT$}{}", spaced_letters(&turn.guess))?;
        writeln!(out, "{:ROW_INDENT$}{}", "", turn.feedback)?;

        let tiles: String = turn
            .guess
            .as_str()
            .chars()
            .zip(turn.feedback.marks())
            .map(|(ch, &mark)| letter_tile(ch, Some(mark)).to_string())
            .collect();
        writeln!(out, "{:ROW_INDENT$}{tiles}", "")?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    }
    writeln!(out)
}

/// Print the keyboard status as two columns, a-z
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_keyboard<W: Write>(out: &mut W, keyboard: &KeyboardStatus) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Keyboard information".bright_cyan().bold())?;
    writeln!(out, "{}", "-".repeat(12))?;

    let keys: Vec<(char, char)> = keyboard
        .iter()
        .map(|(letter, mark)| (letter, mark_symbol(mark)))
        .collect();
    for pair in keys.chunks(2) {
        let line: Vec<String> = pair
            .iter()
            .map(|(letter, symbol)| format!("{letter}: {symbol}"))
            .collect();
        writeln!(out, "{}", line.join("\t"))?;
    }
    writeln!(out)
}

/// Print the statistics for the rounds played so far
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_stats<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", stats.render())?;

    if stats.games_won() > 0 {
        let most = stats.distribution().iter().copied().max().unwrap_or(0);
        writeln!(out)?;
        for (i, &count) in stats.distribution().iter().enumerate() {
            let bar = create_progress_bar(count, most, 20);
            writeln!(out, "  {}: {} {count}", i + 1, bar.green())?;
        }
    }

    writeln!(
        out,
        "Played: {} | Win rate: {:.0}%",
        stats.games_played(),
        stats.win_rate()
    )
}

/// Print the win message
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_win<W: Write>(out: &mut W, guesses: usize) -> io::Result<()> {
    let noun = if guesses == 1 { "guess" } else { "guesses" };
    writeln!(
        out,
        "{}",
        format!("Correct! You won in {guesses} {noun}!").green().bold()
    )
}

/// Print the loss message revealing the secret
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_loss<W: Write>(out: &mut W, secret: &Word) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("You lose! The answer was: {secret}").red().bold()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RoundOutcome;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn turn(guess: &str, secret: &str) -> Turn {
        Turn::evaluate(Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    #[test]
    fn history_lists_each_guess() {
        let history = [turn("garden", "planet"), turn("planet", "planet")];
        let text = render(|out| print_history(out, &history));

        assert!(text.contains("Guess 1:  g a r d e n"));
        assert!(text.contains("Guess 2:  p l a n e t"));
        assert!(text.contains("🟩🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn keyboard_lists_all_letters_in_pairs() {
        let keyboard = KeyboardStatus::from_history(&[turn("garden", "planet")]);
        let text = render(|out| print_keyboard(out, &keyboard));

        assert!(text.contains("a: 🟨\tb:  "));
        assert!(text.contains("e: 🟩\tf:  "));
        assert!(text.contains("y:  \tz:  "));
    }

    #[test]
    fn stats_include_rendered_summary() {
        let mut stats = Statistics::new();
        stats.record(RoundOutcome::Won(3));
        stats.record(RoundOutcome::Lost);
        let text = render(|out| print_stats(out, &stats));

        assert!(text.contains("3 moves: 1"));
        assert!(text.contains("Games lost: 1"));
        assert!(text.contains("Played: 2 | Win rate: 50%"));
    }

    #[test]
    fn win_and_loss_messages() {
        let text = render(|out| print_win(out, 3));
        assert!(text.contains("Correct! You won in 3 guesses!"));

        let text = render(|out| print_win(out, 1));
        assert!(text.contains("You won in 1 guess!"));

        let secret = Word::new("planet").unwrap();
        let text = render(|out| print_loss(out, &secret));
        assert!(text.contains("You lose! The answer was: planet"));
    }
}
