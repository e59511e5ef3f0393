//! Hexordle - CLI
//!
//! Six-letter word guessing game with TUI and plain text modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hexordle::{
    commands::run_simple,
    core::Word,
    game::{GameLoop, RandomChooser},
    interactive::{App, run_tui},
    logging,
    wordlists::{ALLOWED, ANSWERS, Vocabulary, loader::load_from_file, loader::words_from_slice},
};
use log::info;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hexordle",
    about = "Guess the hidden six-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list of valid guesses (default: embedded list)
    #[arg(long, global = true, value_name = "PATH")]
    vocab: Option<PathBuf>,

    /// Word list the secret is drawn from (default: embedded list)
    #[arg(long, global = true, value_name = "PATH")]
    answers: Option<PathBuf>,

    /// Seed for choosing secrets, for a reproducible session
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Do not repeat a secret until every answer has been played
    #[arg(long, global = true)]
    no_repeat: bool,

    /// Write log output to a file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode (line-based prompts, no TUI)
    Simple,
}

/// Load one word list: the file at `path` if given, else the embedded list
fn load_words(path: Option<&Path>, embedded: &[&str]) -> Result<Vec<Word>> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load word list {}", path.display())),
        None => Ok(words_from_slice(embedded)),
    }
}

fn load_vocabulary(cli: &Cli) -> Result<Vocabulary> {
    let guesses = load_words(cli.vocab.as_deref(), ALLOWED)?;
    let answers = load_words(cli.answers.as_deref(), ANSWERS)?;

    let vocabulary = Vocabulary::new(guesses, answers).context("Unusable answer list")?;
    info!(
        "Vocabulary loaded: {} guess words, {} answers",
        vocabulary.guess_count(),
        vocabulary.answer_count()
    );
    Ok(vocabulary)
}

fn build_game(cli: &Cli) -> Result<GameLoop<RandomChooser>> {
    let vocabulary = load_vocabulary(cli)?;
    let answers = vocabulary.answers().to_vec();

    let chooser = match cli.seed {
        Some(seed) => RandomChooser::seeded(answers, seed)?,
        None => RandomChooser::from_os_rng(answers)?,
    }
    .no_repeat(cli.no_repeat);

    Ok(GameLoop::new(vocabulary, chooser))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    let mut game = build_game(&cli)?;

    match command {
        Commands::Play => run_tui(App::new(game)),
        Commands::Simple => run_simple(&mut game, io::stdin().lock(), io::stdout().lock()),
    }
}
