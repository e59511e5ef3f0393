//! TUI application state and logic

use crate::core::{KeyboardStatus, Mark, WORD_LENGTH};
use crate::game::{GameLoop, Phase, Reply, SecretChooser};
use crate::output::HELP_TEXT;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 8;

/// Application state
pub struct App<C: SecretChooser> {
    pub game: GameLoop<C>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub show_keyboard: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<C: SecretChooser> App<C> {
    #[must_use]
    pub fn new(game: GameLoop<C>) -> Self {
        Self {
            game,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Guess the hidden 6-letter word in 6 tries.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type 'h' + Enter for help, 'k' + Enter for the keyboard, Tab to hide it.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            show_keyboard: true,
            should_quit: false,
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit("q");
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.input_buffer.len() < WORD_LENGTH {
                    self.input_buffer.push(c.to_ascii_lowercase());
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Esc => self.input_buffer.clear(),
            KeyCode::Tab => self.show_keyboard = !self.show_keyboard,
            KeyCode::Enter => {
                let input = std::mem::take(&mut self.input_buffer);
                self.submit(&input);
            }
            _ => {}
        }
    }

    /// Send a line of input to the game and react to its reply
    pub fn submit(&mut self, input: &str) {
        if self.game.is_terminated() {
            self.should_quit = true;
            return;
        }

        let reply = self.game.submit(input);
        self.apply_reply(reply);
    }

    fn apply_reply(&mut self, reply: Reply) {
        match reply {
            Reply::Rejected(e) => self.add_message(&e.to_string(), MessageStyle::Error),
            Reply::Help => {
                for line in HELP_TEXT.lines() {
                    self.add_message(line, MessageStyle::Info);
                }
            }
            Reply::Keyboard(status) => {
                self.show_keyboard = true;
                self.add_message(&keyboard_summary(&status), MessageStyle::Info);
            }
            Reply::Guessed(turn) => {
                let left = self.game.session().attempts_left();
                self.add_message(
                    &format!(
                        "{} {}  ({left} {} left)",
                        turn.guess.as_str().to_uppercase(),
                        turn.feedback,
                        if left == 1 { "try" } else { "tries" }
                    ),
                    MessageStyle::Info,
                );
            }
            Reply::Won { guesses, .. } => {
                let celebration = match guesses {
                    1 => "🎯 HOLE IN ONE! Extraordinary!",
                    2 => "🔥 MAGNIFICENT! Two guesses!",
                    3 => "✨ SPLENDID! Three guesses!",
                    4 => "👏 GREAT JOB! Four guesses!",
                    5 => "🎉 NICE WORK! Five guesses!",
                    _ => "😅 PHEW! Got it in six!",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Play again? Type y or n and press Enter.", MessageStyle::Info);
            }
            Reply::Lost { secret, .. } => {
                self.add_message(
                    &format!("Out of tries! The answer was: {}", secret.as_str().to_uppercase()),
                    MessageStyle::Error,
                );
                self.add_message("Play again? Type y or n and press Enter.", MessageStyle::Info);
            }
            Reply::NewRound => {
                self.add_message(
                    &format!("Round {} started!", self.game.round()),
                    MessageStyle::Info,
                );
            }
            Reply::Quit => self.should_quit = true,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Title for the input box, matching the prompt the game is waiting on
    #[must_use]
    pub fn prompt(&self) -> String {
        match self.game.phase() {
            Phase::AwaitingReplayChoice => " Play again? (y/n) ".to_string(),
            Phase::Terminated => " Goodbye ".to_string(),
            _ => format!(
                " Guess {} of 6 | h: help  k: keyboard  q: quit ",
                self.game.session().guess_number()
            ),
        }
    }
}

/// One-line keyboard status: guessed letters grouped by their best mark
fn keyboard_summary(status: &KeyboardStatus) -> String {
    let letters = |wanted: Mark| -> String {
        status
            .iter()
            .filter(|&(_, mark)| mark == Some(wanted))
            .map(|(letter, _)| letter.to_ascii_uppercase())
            .collect()
    };

    if status.seen_count() == 0 {
        return "Keyboard: no letters guessed yet".to_string();
    }
    format!(
        "Keyboard: {} {}  {} {}  {} {}",
        Mark::Correct.symbol(),
        letters(Mark::Correct),
        Mark::Misplaced.symbol(),
        letters(Mark::Misplaced),
        Mark::Incorrect.symbol(),
        letters(Mark::Incorrect)
    )
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<C: SecretChooser>(app: App<C>) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    info!("TUI started");

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!("TUI stopped with an error: {err:#}");
    }
    res
}

fn run_app<B: ratatui::backend::Backend, C: SecretChooser>(
    terminal: &mut Terminal<B>,
    mut app: App<C>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    info!(
        "TUI closed after {} finished rounds",
        app.game.statistics().games_played()
    );
    Ok(())
}
