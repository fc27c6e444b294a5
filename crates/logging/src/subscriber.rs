//! crates/logging/src/subscriber.rs
//! Installation of a `tracing` subscriber for [`TracingSink`](crate::TracingSink) events.
//!
//! The subscriber writes to stderr and is filtered by an [`EnvFilter`]
//! directive read from [`TRACE_ENV`]. When the variable is unset nothing is
//! recorded, so console output is never duplicated unless asked for.

use std::env;

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::config::TRACE_ENV;

/// Directive applied when [`TRACE_ENV`] is unset or empty.
pub const DEFAULT_DIRECTIVE: &str = "off";

/// Failure while installing the subscriber.
#[derive(Debug, Error)]
pub enum SubscriberError {
    /// The filter directive could not be parsed.
    #[error("invalid trace filter {directive:?}: {source}")]
    InvalidFilter {
        /// The rejected directive.
        directive: String,
        /// Parser failure.
        source: tracing_subscriber::filter::ParseError,
    },
    /// A global subscriber was already installed.
    #[error("tracing subscriber already installed: {0}")]
    AlreadyInstalled(#[from] TryInitError),
}

/// Builds the filter for `directive`, falling back to [`DEFAULT_DIRECTIVE`].
///
/// # Errors
///
/// Returns [`SubscriberError::InvalidFilter`] when the directive is malformed.
pub fn build_filter(directive: Option<&str>) -> Result<EnvFilter, SubscriberError> {
    let directive = directive
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_DIRECTIVE);

    EnvFilter::try_new(directive).map_err(|source| SubscriberError::InvalidFilter {
        directive: directive.to_owned(),
        source,
    })
}

/// Installs the global subscriber with `directive` as its filter.
///
/// # Errors
///
/// Returns [`SubscriberError`] when the directive is malformed or a global
/// subscriber is already set.
pub fn init_tracing(directive: Option<&str>) -> Result<(), SubscriberError> {
    let filter = build_filter(directive)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .compact(),
        )
        .try_init()?;

    Ok(())
}

/// Installs the global subscriber filtered by [`TRACE_ENV`].
///
/// # Errors
///
/// See [`init_tracing`].
pub fn init_tracing_from_env() -> Result<(), SubscriberError> {
    let directive = env::var(TRACE_ENV).ok();
    init_tracing(directive.as_deref())
}
