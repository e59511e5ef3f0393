//! Game rules and session flow
//!
//! This module turns raw player input into rounds: validation, the
//! per-round session, the replay loop and running statistics.

pub mod chooser;
mod engine;
pub mod input;
mod session;
mod stats;

pub use chooser::{RandomChooser, SecretChooser, SequenceChooser};
pub use engine::{GameLoop, Phase, Reply};
pub use input::{Command, Input, InputError, ReplayChoice, parse_guess_input};
pub use session::Session;
pub use stats::{RoundOutcome, Statistics};
