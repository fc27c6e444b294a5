//! crates/logging/src/structured.rs
//! Structured sinks that receive every emitted message alongside the console.
//!
//! The logger hands each sink the original, untokenized format string and its
//! positional arguments so the sink can keep the template for grouping while
//! still rendering the final text. Sinks are shared between threads and must
//! be callable through `&self`.

use std::fmt::Display;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::SinkError;
use crate::format::format_message;
use crate::level::Severity;

/// `tracing` target used by [`TracingSink`].
pub const TRACING_TARGET: &str = "hostlog";

/// Receiver of structured log events.
pub trait StructuredSink: Send + Sync {
    /// Records one event.
    ///
    /// `format` is the message template exactly as the caller supplied it.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] when the event cannot be recorded.
    fn write(
        &self,
        severity: Severity,
        format: &str,
        args: &[&dyn Display],
    ) -> Result<(), SinkError>;
}

impl<S> StructuredSink for Box<S>
where
    S: StructuredSink + ?Sized,
{
    fn write(
        &self,
        severity: Severity,
        format: &str,
        args: &[&dyn Display],
    ) -> Result<(), SinkError> {
        (**self).write(severity, format, args)
    }
}

impl<S> StructuredSink for std::sync::Arc<S>
where
    S: StructuredSink + ?Sized,
{
    fn write(
        &self,
        severity: Severity,
        format: &str,
        args: &[&dyn Display],
    ) -> Result<(), SinkError> {
        (**self).write(severity, format, args)
    }
}

/// Sink that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl StructuredSink for NullSink {
    fn write(&self, _: Severity, _: &str, _: &[&dyn Display]) -> Result<(), SinkError> {
        Ok(())
    }
}

/// One event captured by [`MemorySink`].
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEvent {
    /// Severity forwarded by the logger.
    pub severity: Severity,
    /// The original format string.
    pub template: String,
    /// Arguments rendered through [`Display`].
    pub args: Vec<String>,
}

impl LogEvent {
    /// Renders the template against the captured arguments.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`](crate::RenderError) when the template refers to
    /// an argument that was not captured.
    pub fn message(&self) -> Result<String, crate::RenderError> {
        let args: Vec<&dyn Display> = self.args.iter().map(|arg| arg as &dyn Display).collect();
        format_message(&self.template, &args)
    }
}

/// Sink that keeps every event in memory.
///
/// Useful for tests and for hosts that inspect the run's log after the fact.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<LogEvent>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<LogEvent> {
        self.lock().clone()
    }

    /// Removes and returns the recorded events, oldest first.
    pub fn drain(&self) -> Vec<LogEvent> {
        std::mem::take(&mut *self.lock())
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether no events are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl StructuredSink for MemorySink {
    fn write(
        &self,
        severity: Severity,
        format: &str,
        args: &[&dyn Display],
    ) -> Result<(), SinkError> {
        let event = LogEvent {
            severity,
            template: format.to_owned(),
            args: args.iter().map(ToString::to_string).collect(),
        };
        self.lock().push(event);
        Ok(())
    }
}

/// Sink that emits one `tracing` event per message.
///
/// Events use the [`TRACING_TARGET`] target and carry `severity`, `template`
/// and the rendered `message` as fields. Whether anything is recorded depends
/// on the installed subscriber.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl StructuredSink for TracingSink {
    fn write(
        &self,
        severity: Severity,
        format: &str,
        args: &[&dyn Display],
    ) -> Result<(), SinkError> {
        let message = format_message(format, args)?;
        let name = severity.as_str();

        match severity {
            Severity::Verbose => {
                tracing::trace!(target: TRACING_TARGET, severity = name, template = format, message = %message);
            }
            Severity::Debug => {
                tracing::debug!(target: TRACING_TARGET, severity = name, template = format, message = %message);
            }
            Severity::Information => {
                tracing::info!(target: TRACING_TARGET, severity = name, template = format, message = %message);
            }
            Severity::Warning => {
                tracing::warn!(target: TRACING_TARGET, severity = name, template = format, message = %message);
            }
            Severity::Error | Severity::Fatal => {
                tracing::error!(target: TRACING_TARGET, severity = name, template = format, message = %message);
            }
        }
        Ok(())
    }
}
