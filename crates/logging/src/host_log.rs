//! crates/logging/src/host_log.rs
//! The verbosity-gated, colorizing console logger.

use std::error::Error;
use std::fmt::{self, Display};
use std::sync::{Mutex, MutexGuard, PoisonError};

use logging_sink::{ColorGuard, Console};

use crate::error::WriteError;
use crate::format::{self, RenderedSegment};
use crate::level::LogLevel;
use crate::palette::PaletteTable;
use crate::structured::{StructuredSink, TracingSink};
use crate::verbosity::{Verbosity, VerbosityThreshold};

/// Console logger shared by every component of a host process.
///
/// Each [`write`](Self::write) checks the message verbosity against the
/// current threshold, renders the format string, and then writes the rendered
/// segments to the console while holding exclusive access to it. Literal text
/// uses the level's base colors and substituted arguments use its argument
/// colors. The original template and arguments are forwarded to the
/// structured sink before the line is closed.
///
/// Writes from different threads never interleave within a line. The console
/// colors are reset and the line is terminated on every exit path once output
/// has started.
///
/// # Examples
///
/// ```
/// use logging::{HostLog, LogLevel, MemorySink, Verbosity};
/// use logging_sink::BufferConsole;
///
/// let log = HostLog::with_sink(BufferConsole::new(), MemorySink::new());
/// log.set_verbosity(Verbosity::Normal);
///
/// log.write(Verbosity::Normal, LogLevel::Information, "built {0} targets", &[&3])?;
/// log.write(Verbosity::Verbose, LogLevel::Verbose, "hidden", &[])?;
///
/// assert_eq!(log.with_console(|console| console.text()), "built 3 targets\n");
/// # Ok::<(), logging::WriteError>(())
/// ```
pub struct HostLog<C> {
    console: Mutex<C>,
    palettes: PaletteTable,
    threshold: VerbosityThreshold,
    sink: Box<dyn StructuredSink>,
}

impl<C> HostLog<C>
where
    C: Console,
{
    /// Creates a logger that forwards structured events to `tracing`.
    ///
    /// The palette table is built against the console's current background
    /// and the threshold starts at [`Verbosity::initial`].
    pub fn new(console: C) -> Self {
        Self::with_sink(console, TracingSink)
    }

    /// Creates a logger that forwards structured events to `sink`.
    pub fn with_sink<S>(console: C, sink: S) -> Self
    where
        S: StructuredSink + 'static,
    {
        let palettes = PaletteTable::new(console.background_color());
        Self::from_parts(console, palettes, Box::new(sink), Verbosity::initial())
    }

    /// Creates a logger from explicit parts.
    pub fn from_parts(
        console: C,
        palettes: PaletteTable,
        sink: Box<dyn StructuredSink>,
        verbosity: Verbosity,
    ) -> Self {
        Self {
            console: Mutex::new(console),
            palettes,
            threshold: VerbosityThreshold::new(verbosity),
            sink,
        }
    }

    /// Writes a message when `verbosity` passes the current threshold.
    ///
    /// Messages above the threshold return `Ok(())` without touching the
    /// console or the sink.
    ///
    /// # Errors
    ///
    /// - [`WriteError::Render`] when a placeholder refers past the end of
    ///   `args`. Rendering happens before the console is locked, so nothing
    ///   is written and nothing is forwarded.
    /// - [`WriteError::Console`] when the console fails. Colors are reset and
    ///   the line is closed on a best-effort basis; the sink is not called.
    /// - [`WriteError::Sink`] when the structured sink fails. The console line
    ///   has already been written and closed.
    pub fn write(
        &self,
        verbosity: Verbosity,
        level: LogLevel,
        format: &str,
        args: &[&dyn Display],
    ) -> Result<(), WriteError> {
        if !self.threshold.allows(verbosity) {
            return Ok(());
        }

        let tokens = format::parse(format);
        let segments = format::render_all(&tokens, args)?;
        let palette = self.palettes.get(level);

        let mut console = self.lock();
        let mut line = ColorGuard::new(&mut *console);
        emit(&mut *line, &segments, |segment| {
            palette.colors_for(&segment.token)
        })?;

        let forwarded = self.sink.write(level.severity(), format, args);
        line.finish()?;
        forwarded?;
        Ok(())
    }

    /// Writes a [`LogLevel::Fatal`] message at [`Verbosity::Quiet`].
    ///
    /// # Errors
    ///
    /// See [`write`](Self::write).
    pub fn fatal(&self, format: &str, args: &[&dyn Display]) -> Result<(), WriteError> {
        self.write_level(LogLevel::Fatal, format, args)
    }

    /// Writes a [`LogLevel::Error`] message at [`Verbosity::Quiet`].
    ///
    /// # Errors
    ///
    /// See [`write`](Self::write).
    pub fn error(&self, format: &str, args: &[&dyn Display]) -> Result<(), WriteError> {
        self.write_level(LogLevel::Error, format, args)
    }

    /// Writes a [`LogLevel::Warning`] message at [`Verbosity::Minimal`].
    ///
    /// # Errors
    ///
    /// See [`write`](Self::write).
    pub fn warning(&self, format: &str, args: &[&dyn Display]) -> Result<(), WriteError> {
        self.write_level(LogLevel::Warning, format, args)
    }

    /// Writes a [`LogLevel::Information`] message at [`Verbosity::Normal`].
    ///
    /// # Errors
    ///
    /// See [`write`](Self::write).
    pub fn information(&self, format: &str, args: &[&dyn Display]) -> Result<(), WriteError> {
        self.write_level(LogLevel::Information, format, args)
    }

    /// Writes a [`LogLevel::Verbose`] message at [`Verbosity::Verbose`].
    ///
    /// # Errors
    ///
    /// See [`write`](Self::write).
    pub fn verbose(&self, format: &str, args: &[&dyn Display]) -> Result<(), WriteError> {
        self.write_level(LogLevel::Verbose, format, args)
    }

    /// Writes a [`LogLevel::Debug`] message at [`Verbosity::Diagnostic`].
    ///
    /// # Errors
    ///
    /// See [`write`](Self::write).
    pub fn debug(&self, format: &str, args: &[&dyn Display]) -> Result<(), WriteError> {
        self.write_level(LogLevel::Debug, format, args)
    }

    fn write_level(
        &self,
        level: LogLevel,
        format: &str,
        args: &[&dyn Display],
    ) -> Result<(), WriteError> {
        self.write(level.default_verbosity(), level, format, args)
    }

    /// Logs a failure that ended the host's run.
    ///
    /// At [`Verbosity::Diagnostic`] the message carries the error's debug
    /// representation followed by its source chain; otherwise only the
    /// error's display text is shown.
    ///
    /// # Errors
    ///
    /// See [`write`](Self::write).
    pub fn report_error(&self, error: &(dyn Error + 'static)) -> Result<(), WriteError> {
        if self.verbosity() == Verbosity::Diagnostic {
            self.error("Error: {0}", &[&ErrorReport(error)])
        } else {
            self.error("Error: {0}", &[&error])
        }
    }
}

impl<C> HostLog<C> {
    /// The current threshold.
    pub fn verbosity(&self) -> Verbosity {
        self.threshold.get()
    }

    /// Replaces the threshold; affects subsequent writes only.
    pub fn set_verbosity(&self, verbosity: Verbosity) {
        self.threshold.set(verbosity);
    }

    /// Reports whether a message at `verbosity` would be written.
    pub fn is_enabled(&self, verbosity: Verbosity) -> bool {
        self.threshold.allows(verbosity)
    }

    /// The palette table captured at construction.
    pub const fn palettes(&self) -> &PaletteTable {
        &self.palettes
    }

    /// Runs `f` with exclusive access to the console.
    pub fn with_console<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        f(&mut self.lock())
    }

    /// Consumes the logger and returns its console.
    pub fn into_console(self) -> C {
        self.console
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, C> {
        self.console.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C> fmt::Debug for HostLog<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostLog")
            .field("verbosity", &self.verbosity())
            .field("palettes", &self.palettes)
            .finish_non_exhaustive()
    }
}

fn emit<C>(
    console: &mut C,
    segments: &[RenderedSegment<'_>],
    colors: impl Fn(&RenderedSegment<'_>) -> logging_sink::ConsoleColors,
) -> std::io::Result<()>
where
    C: Console + ?Sized,
{
    for segment in segments {
        console.set_colors(colors(segment))?;
        console.write(&segment.text)?;
    }
    Ok(())
}

/// Debug representation of an error followed by its source chain.
struct ErrorReport<'a>(&'a (dyn Error + 'static));

impl Display for ErrorReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)?;
        let mut source = self.0.source();
        while let Some(cause) = source {
            write!(f, "\n  caused by: {cause}")?;
            source = cause.source();
        }
        Ok(())
    }
}
