//! crates/cli/src/error.rs
//! Failures surfaced by the command-line front-end.

use logging::{ConfigError, WriteError};
use thiserror::Error;

/// Error produced while running the front-end.
#[derive(Debug, Error)]
pub enum CliError {
    /// The command line could not be parsed, or help/version was requested.
    #[error(transparent)]
    Usage(#[from] clap::Error),
    /// An environment variable held an invalid value.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Writing the message failed.
    #[error(transparent)]
    Write(#[from] WriteError),
}

impl CliError {
    /// Exit status reported for this error.
    ///
    /// Help and version requests travel through clap's error path but exit
    /// successfully.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(error) if !error.use_stderr() => 0,
            Self::Usage(_) | Self::Config(_) | Self::Write(_) => 1,
        }
    }
}
