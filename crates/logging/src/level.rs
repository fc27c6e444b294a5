//! crates/logging/src/level.rs
//! Message categories and their mapping onto structured-sink severities.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::verbosity::Verbosity;

/// Category of a message.
///
/// The level selects the console palette and the [`Severity`] forwarded to the
/// structured sink. It is independent of [`Verbosity`], which only decides
/// whether the message is emitted at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogLevel {
    /// Unrecoverable failure.
    Fatal,
    /// Failure.
    Error,
    /// Suspicious condition.
    Warning,
    /// Regular progress.
    Information,
    /// Detailed progress.
    Verbose,
    /// Internal diagnostics.
    Debug,
}

impl LogLevel {
    /// Every level, most severe first.
    pub const ALL: [Self; 6] = [
        Self::Fatal,
        Self::Error,
        Self::Warning,
        Self::Information,
        Self::Verbose,
        Self::Debug,
    ];

    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Information => "information",
            Self::Verbose => "verbose",
            Self::Debug => "debug",
        }
    }

    /// The verbosity used by the level-named convenience writers.
    ///
    /// Failures are shown even at [`Verbosity::Quiet`]; debug output needs
    /// [`Verbosity::Diagnostic`].
    #[must_use]
    pub const fn default_verbosity(self) -> Verbosity {
        match self {
            Self::Fatal | Self::Error => Verbosity::Quiet,
            Self::Warning => Verbosity::Minimal,
            Self::Information => Verbosity::Normal,
            Self::Verbose => Verbosity::Verbose,
            Self::Debug => Verbosity::Diagnostic,
        }
    }

    /// Returns the severity forwarded to structured sinks.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::Fatal => Severity::Fatal,
            Self::Error => Severity::Error,
            Self::Warning => Severity::Warning,
            Self::Information => Severity::Information,
            Self::Verbose => Severity::Verbose,
            Self::Debug => Severity::Debug,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a [`LogLevel`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid log level '{input}'; expected fatal, error, warning, information, verbose, or debug")]
pub struct ParseLogLevelError {
    input: String,
}

impl ParseLogLevelError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        let level = match trimmed.to_ascii_lowercase().as_str() {
            "fatal" => Self::Fatal,
            "error" => Self::Error,
            "warning" | "warn" => Self::Warning,
            "information" | "info" => Self::Information,
            "verbose" => Self::Verbose,
            "debug" => Self::Debug,
            _ => {
                return Err(ParseLogLevelError {
                    input: text.to_owned(),
                });
            }
        };
        Ok(level)
    }
}

/// Severity scale of the structured sink.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Most detailed tracing.
    Verbose,
    /// Generic low-severity value.
    Debug,
    /// Regular progress.
    Information,
    /// Suspicious condition.
    Warning,
    /// Failure.
    Error,
    /// Unrecoverable failure.
    Fatal,
}

impl Severity {
    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verbose => "verbose",
            Self::Debug => "debug",
            Self::Information => "information",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<LogLevel> for Severity {
    fn from(level: LogLevel) -> Self {
        level.severity()
    }
}
