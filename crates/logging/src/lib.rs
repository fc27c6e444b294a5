#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is the console logger of the build host. It filters messages by
//! a runtime-adjustable [`Verbosity`] threshold, colors each message according
//! to its [`LogLevel`], substitutes positional `{index}` placeholders, and
//! forwards every emitted message to a [`StructuredSink`] for log shipping.
//!
//! # Design
//!
//! [`HostLog`] owns a [`Console`](logging_sink::Console) behind a mutex, a
//! [`PaletteTable`] captured once against the console's ambient background,
//! and a [`VerbosityThreshold`] stored in a single atomic. A write renders
//! the whole format string first ([`format::render_all`]), then locks the
//! console and emits each segment with either the level's base colors or its
//! argument colors. A [`ColorGuard`](logging_sink::ColorGuard) resets the
//! colors and terminates the line on every exit path.
//!
//! # Invariants
//!
//! - A message is written iff its verbosity is less than or equal to the
//!   threshold at the time of the call.
//! - At most one colorized write is in flight; a line never interleaves
//!   segments of two writes.
//! - A render failure produces no console output and no structured event.
//! - [`format::to_template`] applied to [`format::parse`] reproduces the
//!   input exactly.
//!
//! # Errors
//!
//! [`HostLog::write`] returns [`WriteError`], which distinguishes rendering
//! failures, console I/O failures and structured sink failures.
//!
//! # Examples
//!
//! ```
//! use logging::{HostLog, MemorySink, Severity, Verbosity};
//! use logging_sink::BufferConsole;
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let log = HostLog::with_sink(BufferConsole::new(), Arc::clone(&sink));
//! log.set_verbosity(Verbosity::Minimal);
//!
//! log.warning("{0} targets skipped", &[&2])?;
//! log.information("not shown", &[])?;
//!
//! assert_eq!(log.with_console(|console| console.lines()), vec!["2 targets skipped"]);
//! assert_eq!(sink.events()[0].severity, Severity::Warning);
//! # Ok::<(), logging::WriteError>(())
//! ```

mod config;
mod debugger;
mod error;
pub mod format;
mod host_log;
mod level;
mod macros;
mod palette;
mod structured;
#[cfg(feature = "subscriber")]
mod subscriber;
mod verbosity;

pub use config::{COLOR_ENV, ConfigError, LoggerConfig, TRACE_ENV, VERBOSITY_ENV};
pub use debugger::debugger_attached;
pub use error::{RenderError, SinkError, WriteError};
pub use format::{FormatToken, PropertyToken};
pub use host_log::HostLog;
pub use level::{LogLevel, ParseLogLevelError, Severity};
pub use palette::{ConsolePalette, PaletteTable};
pub use structured::{LogEvent, MemorySink, NullSink, StructuredSink, TRACING_TARGET, TracingSink};
#[cfg(feature = "subscriber")]
pub use subscriber::{
    DEFAULT_DIRECTIVE, SubscriberError, build_filter, init_tracing, init_tracing_from_env,
};
pub use verbosity::{ParseVerbosityError, Verbosity, VerbosityThreshold};
