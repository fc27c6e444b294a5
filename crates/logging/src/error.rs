//! crates/logging/src/error.rs
//! Error types surfaced by the logger and its collaborators.

use std::io;

use thiserror::Error;

/// Failure while rendering a format token.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum RenderError {
    /// A placeholder referenced an argument that was not supplied.
    #[error("format placeholder {{{index}}} is out of range for {len} argument(s)")]
    ArgumentOutOfRange {
        /// The placeholder's argument index.
        index: usize,
        /// Number of arguments supplied.
        len: usize,
    },
}

/// Failure reported by a [`StructuredSink`](crate::StructuredSink).
#[derive(Debug, Error)]
pub enum SinkError {
    /// The sink could not render the message template.
    #[error("structured sink could not render message: {0}")]
    Render(#[from] RenderError),
    /// The sink refused or failed to record the event.
    #[error("structured sink rejected event: {reason}")]
    Rejected {
        /// Why the event was rejected.
        reason: String,
    },
}

impl SinkError {
    /// Creates a [`SinkError::Rejected`] error.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }
}

/// Failure returned by [`HostLog::write`](crate::HostLog::write).
///
/// Every variant is returned only after exclusive console access has been
/// released; [`Console`](WriteError::Console) and [`Sink`](WriteError::Sink)
/// failures are returned after the console colors were reset.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The format string referenced a missing argument; nothing was written.
    #[error(transparent)]
    Render(#[from] RenderError),
    /// The console device failed.
    #[error("console write failed: {0}")]
    Console(#[from] io::Error),
    /// The structured sink failed after the console line was written.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_index_and_count() {
        let error = RenderError::ArgumentOutOfRange { index: 5, len: 2 };
        assert_eq!(
            error.to_string(),
            "format placeholder {5} is out of range for 2 argument(s)"
        );
    }

    #[test]
    fn write_error_preserves_render_message() {
        let error = WriteError::from(RenderError::ArgumentOutOfRange { index: 1, len: 0 });
        assert!(error.to_string().contains("{1}"));
    }

    #[test]
    fn sink_rejection_carries_reason() {
        let error = SinkError::rejected("queue full");
        assert_eq!(error.to_string(), "structured sink rejected event: queue full");
    }
}
