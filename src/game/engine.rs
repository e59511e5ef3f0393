//! The game loop: turn progression, round endings, replay and statistics
//!
//! # State Machine
//! - `AwaitingGuess` → valid guess → `AwaitingGuess`, `RoundWon` or `RoundLost`
//! - `RoundWon` / `RoundLost` → outcome recorded → `AwaitingReplayChoice`
//! - `AwaitingReplayChoice` → yes → new round in `AwaitingGuess`; no → `Terminated`
//! - quit from any prompt → `Terminated`
//!
//! Help and keyboard commands never change state or use up an attempt.

use super::chooser::SecretChooser;
use super::input::{Command, Input, InputError, ReplayChoice, parse_guess_input};
use super::session::Session;
use super::stats::{RoundOutcome, Statistics};
use crate::core::{KeyboardStatus, Turn, Word};
use crate::wordlists::Vocabulary;
use log::{debug, info, trace};

/// Where the game loop currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingGuess,
    RoundWon,
    RoundLost,
    AwaitingReplayChoice,
    Terminated,
}

/// What happened in response to one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Input was not accepted; nothing changed
    Rejected(InputError),
    /// Help was requested
    Help,
    /// Keyboard status was requested
    Keyboard(KeyboardStatus),
    /// Guess recorded, round continues
    Guessed(Turn),
    /// Guess found the secret
    Won { turn: Turn, guesses: usize },
    /// Last attempt used without finding the secret
    Lost { turn: Turn, secret: Word },
    /// A new round has started
    NewRound,
    /// The game is over
    Quit,
}

/// Drives rounds from raw player input
pub struct GameLoop<C: SecretChooser> {
    vocabulary: Vocabulary,
    chooser: C,
    session: Session,
    stats: Statistics,
    phase: Phase,
    round: usize,
}

impl<C: SecretChooser> GameLoop<C> {
    /// Start the first round with a freshly chosen secret
    pub fn new(vocabulary: Vocabulary, mut chooser: C) -> Self {
        let secret = chooser.choose();
        info!("Round 1 started");
        trace!("Secret for round 1: {secret}");

        Self {
            vocabulary,
            chooser,
            session: Session::new(secret),
            stats: Statistics::new(),
            phase: Phase::AwaitingGuess,
            round: 1,
        }
    }

    /// Handle one line of input from whichever prompt is showing
    ///
    /// # Panics
    /// Panics if called after the game has terminated.
    pub fn submit(&mut self, raw: &str) -> Reply {
        match self.phase {
            Phase::AwaitingGuess => self.handle_guess_input(raw),
            Phase::AwaitingReplayChoice => self.handle_replay_input(raw),
            Phase::Terminated => panic!("input submitted after the game terminated"),
            Phase::RoundWon | Phase::RoundLost => {
                unreachable!("round outcomes are recorded before returning")
            }
        }
    }

    fn handle_guess_input(&mut self, raw: &str) -> Reply {
        let input = match parse_guess_input(raw, &self.vocabulary) {
            Ok(input) => input,
            Err(e) => {
                debug!("Rejected guess input {raw:?}: {e}");
                return Reply::Rejected(e);
            }
        };

        match input {
            Input::Command(Command::Quit) => self.quit(),
            Input::Command(Command::Help) => {
                debug!("Help requested");
                Reply::Help
            }
            Input::Command(Command::Keyboard) => {
                debug!("Keyboard status requested");
                Reply::Keyboard(self.session.keyboard())
            }
            Input::Guess(guess) => self.play_guess(guess),
        }
    }

    fn play_guess(&mut self, guess: Word) -> Reply {
        let turn = self.session.record_guess(guess);
        debug!(
            "Guess {} of round {}: {} {}",
            self.session.attempts_used(),
            self.round,
            turn.guess,
            turn.feedback.codes()
        );

        if self.session.is_won() {
            let guesses = self.session.attempts_used();
            self.phase = Phase::RoundWon;
            self.conclude_round(RoundOutcome::Won(guesses));
            Reply::Won { turn, guesses }
        } else if self.session.is_lost() {
            self.phase = Phase::RoundLost;
            self.conclude_round(RoundOutcome::Lost);
            Reply::Lost {
                turn,
                secret: *self.session.secret(),
            }
        } else {
            Reply::Guessed(turn)
        }
    }

    fn conclude_round(&mut self, outcome: RoundOutcome) {
        info!("Round {} ended: {outcome:?}", self.round);
        self.stats.record(outcome);
        self.phase = Phase::AwaitingReplayChoice;
    }

    fn handle_replay_input(&mut self, raw: &str) -> Reply {
        if Command::parse(raw) == Some(Command::Quit) {
            return self.quit();
        }

        match ReplayChoice::parse(raw) {
            Some(ReplayChoice::Continue) => {
                self.start_round();
                Reply::NewRound
            }
            Some(ReplayChoice::Decline) => self.quit(),
            None => {
                debug!("Rejected replay answer {raw:?}");
                Reply::Rejected(InputError::InvalidReplayChoice(raw.trim().to_string()))
            }
        }
    }

    fn start_round(&mut self) {
        let secret = self.chooser.choose();
        self.round += 1;
        info!("Round {} started", self.round);
        trace!("Secret for round {}: {secret}", self.round);

        self.session.reset(secret);
        self.phase = Phase::AwaitingGuess;
    }

    fn quit(&mut self) -> Reply {
        info!(
            "Game terminated after {} finished rounds",
            self.stats.games_played()
        );
        self.phase = Phase::Terminated;
        Reply::Quit
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Round number, starting at 1
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }
}
