//! Simple interactive CLI mode
//!
//! Line-oriented game without the TUI: one prompt, one line of input.

use crate::game::{GameLoop, Phase, Reply, SecretChooser};
use crate::output::{
    HELP_TEXT, print_history, print_keyboard, print_loss, print_stats, print_win,
};
use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use std::io::{BufRead, Write};

/// Run the game on line-based input until the player quits
///
/// End of input is treated like the quit command.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<C, R, W>(game: &mut GameLoop<C>, mut input: R, mut out: W) -> Result<()>
where
    C: SecretChooser,
    R: BufRead,
    W: Write,
{
    print_banner(&mut out)?;

    while !game.is_terminated() {
        write_prompt(game, &mut out)?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Failed to read player input")?;
        if read == 0 {
            info!("End of input, leaving the game");
            writeln!(out)?;
            game.submit("q");
            print_farewell(&mut out)?;
            break;
        }

        let reply = game.submit(&line);
        print_reply(game, &reply, &mut out)?;
    }

    out.flush()?;
    Ok(())
}

fn print_banner<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", "═".repeat(40).cyan())?;
    writeln!(out, "{}", "  HEXORDLE - guess the 6-letter word".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(40).cyan())?;
    writeln!(out, "Type 'h' for help, 'k' for the keyboard, 'q' to quit.\n")?;
    Ok(())
}

fn write_prompt<C: SecretChooser, W: Write>(game: &GameLoop<C>, out: &mut W) -> Result<()> {
    match game.phase() {
        Phase::AwaitingReplayChoice => write!(out, "Would you like to play again (y/n)? ")?,
        _ => write!(out, "Enter guess {}: ", game.session().guess_number())?,
    }
    out.flush()?;
    Ok(())
}

fn print_reply<C: SecretChooser, W: Write>(
    game: &GameLoop<C>,
    reply: &Reply,
    out: &mut W,
) -> Result<()> {
    match reply {
        Reply::Rejected(e) => writeln!(out, "{}", e.to_string().red())?,
        Reply::Help => writeln!(out, "{HELP_TEXT}")?,
        Reply::Keyboard(keyboard) => print_keyboard(out, keyboard)?,
        Reply::Guessed(_) => print_history(out, game.session().history())?,
        Reply::Won { guesses, .. } => {
            print_history(out, game.session().history())?;
            print_win(out, *guesses)?;
            print_stats(out, game.statistics())?;
        }
        Reply::Lost { secret, .. } => {
            print_history(out, game.session().history())?;
            print_loss(out, secret)?;
            print_stats(out, game.statistics())?;
        }
        Reply::NewRound => writeln!(out, "\n{}\n", "New round started!".bright_cyan())?,
        Reply::Quit => print_farewell(out)?,
    }
    Ok(())
}

fn print_farewell<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Thanks for playing!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SequenceChooser;
    use crate::wordlists::Vocabulary;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn play(secrets: &[&str], script: &str) -> (GameLoop<SequenceChooser>, String) {
        let vocabulary = Vocabulary::new(
            words_from_slice(&["garden", "bridge", "engine"]),
            words_from_slice(secrets),
        )
        .unwrap();
        let mut game =
            GameLoop::new(vocabulary, SequenceChooser::new(words_from_slice(secrets)).unwrap());
        let mut out = Vec::new();

        run_simple(&mut game, Cursor::new(script), &mut out).unwrap();
        (game, String::from_utf8(out).unwrap())
    }

    #[test]
    fn immediate_quit() {
        let (game, text) = play(&["planet"], "q\n");
        assert!(game.is_terminated());
        assert!(text.contains("Enter guess 1: "));
        assert!(text.contains("Thanks for playing!"));
    }

    #[test]
    fn end_of_input_quits() {
        let (game, text) = play(&["planet"], "garden\n");
        assert!(game.is_terminated());
        assert!(text.contains("Enter guess 2: "));
        assert!(text.contains("Thanks for playing!"));
    }

    #[test]
    fn invalid_input_reprompts_same_guess_number() {
        let (_, text) = play(&["planet"], "abc\nxxxxxx\nq\n");
        assert!(text.contains("Invalid! Guess must be of length 6"));
        assert!(text.contains("Invalid! Unknown word"));
        assert!(!text.contains("Enter guess 2: "));
    }

    #[test]
    fn help_and_keyboard_commands() {
        let (_, text) = play(&["planet"], "garden\nh\nk\nq\n");
        assert!(text.contains("Commands: h = help"));
        assert!(text.contains("Keyboard information"));
        assert!(text.contains("e: 🟩"));
        // Commands did not consume the second attempt
        assert_eq!(text.matches("Enter guess 2: ").count(), 3);
    }

    #[test]
    fn win_then_decline() {
        let (game, text) = play(&["planet"], "garden\nplanet\nn\n");
        assert!(text.contains("Correct! You won in 2 guesses!"));
        assert!(text.contains("2 moves: 1"));
        assert!(text.contains("Would you like to play again (y/n)? "));
        assert!(game.is_terminated());
    }

    #[test]
    fn loss_reveals_secret_and_offers_replay() {
        let script = "garden\n".repeat(6) + "y\nq\n";
        let (game, text) = play(&["planet", "bridge"], &script);

        assert!(text.contains("You lose! The answer was: planet"));
        assert!(text.contains("Games lost: 1"));
        assert!(!text.contains("Enter guess 7: "));
        assert!(text.contains("New round started!"));
        assert_eq!(game.round(), 2);
        assert_eq!(game.statistics().losses(), 1);
    }
}
