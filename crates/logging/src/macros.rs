//! crates/logging/src/macros.rs
//! Argument-building macro for [`HostLog`](crate::HostLog).

/// Writes a message through a [`HostLog`](crate::HostLog) without spelling out
/// the `&[&dyn Display]` argument slice.
///
/// The level is named by its [`LogLevel`](crate::LogLevel) variant. Without a
/// `verbosity =` prefix the level's default verbosity is used. The macro
/// evaluates to the `Result` returned by [`HostLog::write`](crate::HostLog::write).
///
/// # Example
///
/// ```
/// use logging::{HostLog, MemorySink, Verbosity, host_log};
/// use logging_sink::BufferConsole;
///
/// let log = HostLog::with_sink(BufferConsole::new(), MemorySink::new());
/// log.set_verbosity(Verbosity::Normal);
///
/// host_log!(log, Warning, "{0} of {1} tasks skipped", 2, 7)?;
/// host_log!(log, verbosity = Verbosity::Quiet, Information, "done")?;
///
/// assert_eq!(
///     log.with_console(|console| console.lines()),
///     vec!["2 of 7 tasks skipped", "done"],
/// );
/// # Ok::<(), logging::WriteError>(())
/// ```
#[macro_export]
macro_rules! host_log {
    ($log:expr, verbosity = $verbosity:expr, $level:ident, $format:expr $(, $arg:expr)* $(,)?) => {
        $log.write(
            $verbosity,
            $crate::LogLevel::$level,
            $format,
            &[$(&$arg as &dyn ::core::fmt::Display),*],
        )
    };
    ($log:expr, $level:ident, $format:expr $(, $arg:expr)* $(,)?) => {
        $log.write(
            $crate::LogLevel::$level.default_verbosity(),
            $crate::LogLevel::$level,
            $format,
            &[$(&$arg as &dyn ::core::fmt::Display),*],
        )
    };
}
