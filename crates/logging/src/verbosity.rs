//! crates/logging/src/verbosity.rs
//! Verbosity levels and the atomically updated emission threshold.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use thiserror::Error;

/// Caller-assigned importance of a message.
///
/// Levels are ordered from least to most chatty. A message is emitted only
/// when its verbosity is less than or equal to the logger's threshold, so a
/// [`Quiet`](Self::Quiet) message is always shown and a
/// [`Diagnostic`](Self::Diagnostic) message only at the highest threshold.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Verbosity {
    /// Only messages that must never be suppressed.
    Quiet = 0,
    /// Warnings and above.
    Minimal = 1,
    /// Regular progress output.
    #[default]
    Normal = 2,
    /// Detailed progress output.
    Verbose = 3,
    /// Everything, including internal diagnostics.
    Diagnostic = 4,
}

impl Verbosity {
    /// Every verbosity in ascending order.
    pub const ALL: [Self; 5] = [
        Self::Quiet,
        Self::Minimal,
        Self::Normal,
        Self::Verbose,
        Self::Diagnostic,
    ];

    /// Returns the numeric rank (`0..=4`).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Converts a numeric rank back into a verbosity.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Quiet),
            1 => Some(Self::Minimal),
            2 => Some(Self::Normal),
            3 => Some(Self::Verbose),
            4 => Some(Self::Diagnostic),
            _ => None,
        }
    }

    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Minimal => "minimal",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
            Self::Diagnostic => "diagnostic",
        }
    }

    /// Returns the single-letter abbreviation accepted by [`FromStr`].
    #[must_use]
    pub const fn abbreviation(self) -> char {
        match self {
            Self::Quiet => 'q',
            Self::Minimal => 'm',
            Self::Normal => 'n',
            Self::Verbose => 'v',
            Self::Diagnostic => 'd',
        }
    }

    /// The threshold a logger starts with.
    ///
    /// [`Diagnostic`](Self::Diagnostic) when a debugger or tracer is attached
    /// to the process, [`Normal`](Self::Normal) otherwise.
    #[must_use]
    pub fn initial() -> Self {
        if crate::debugger::debugger_attached() {
            Self::Diagnostic
        } else {
            Self::Normal
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a [`Verbosity`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid verbosity '{input}'; expected quiet, minimal, normal, verbose, or diagnostic")]
pub struct ParseVerbosityError {
    input: String,
}

impl ParseVerbosityError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Verbosity {
    type Err = ParseVerbosityError;

    /// Accepts full names, single-letter abbreviations and ranks `0..=4`,
    /// ignoring ASCII case and surrounding whitespace.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        let by_name = Self::ALL.into_iter().find(|verbosity| {
            trimmed.eq_ignore_ascii_case(verbosity.as_str())
                || (trimmed.len() == 1
                    && trimmed
                        .chars()
                        .next()
                        .is_some_and(|c| c.eq_ignore_ascii_case(&verbosity.abbreviation())))
        });

        by_name
            .or_else(|| trimmed.parse::<u8>().ok().and_then(Self::from_u8))
            .ok_or_else(|| ParseVerbosityError {
                input: text.to_owned(),
            })
    }
}

/// Process-wide emission threshold that can be replaced at any time.
///
/// Reads and writes are single atomic operations; a write racing with a
/// message already past the gate does not affect that message.
#[derive(Debug)]
pub struct VerbosityThreshold {
    level: AtomicU8,
}

impl VerbosityThreshold {
    /// Creates a threshold starting at `verbosity`.
    #[must_use]
    pub const fn new(verbosity: Verbosity) -> Self {
        Self {
            level: AtomicU8::new(verbosity.as_u8()),
        }
    }

    /// Returns the current threshold.
    #[must_use]
    pub fn get(&self) -> Verbosity {
        Verbosity::from_u8(self.level.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Replaces the threshold.
    pub fn set(&self, verbosity: Verbosity) {
        self.level.store(verbosity.as_u8(), Ordering::Relaxed);
    }

    /// Reports whether a message at `verbosity` passes the gate.
    #[must_use]
    pub fn allows(&self, verbosity: Verbosity) -> bool {
        verbosity <= self.get()
    }
}

impl Default for VerbosityThreshold {
    fn default() -> Self {
        Self::new(Verbosity::initial())
    }
}
