//! Logger setup
//!
//! The filter comes from `RUST_LOG` (default `warn`). Output goes to stderr,
//! or to a file so it does not draw over the TUI.

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use std::fs::File;
use std::path::Path;

const DEFAULT_FILTER: &str = "warn";

/// Install the global logger
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a logger is already
/// installed.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file))).write_style(env_logger::WriteStyle::Never);
    }

    builder.try_init().context("Logger already initialized")?;
    Ok(())
}
