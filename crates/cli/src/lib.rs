#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the `hostlog` command-line front-end. It parses a message
//! template, its positional arguments and the logger options, then writes the
//! message through a [`HostLog`] bound to standard output.
//!
//! # Design
//!
//! [`run`] accepts the argument iterator together with the output handles so
//! tests can drive it without spawning a process. Options are layered: flags
//! override the `HOSTLOG_*` environment, which overrides the built-in
//! defaults. A failed write is reported through
//! [`HostLog::report_error`], exactly as the build host reports a failed run.
//!
//! # Invariants
//!
//! - `run` never panics; failures surface as non-zero exit codes.
//! - Usage errors and configuration errors are written to stderr; message
//!   output and reported write failures go to stdout.
//!
//! # Examples
//!
//! ```
//! use cli::run_with_env;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = run_with_env(
//!     ["hostlog", "--color", "never", "--verbosity", "normal", "Hello {0}, you are {1}", "Ann", "42"],
//!     |_| None,
//!     &mut stdout,
//!     false,
//!     &mut stderr,
//! );
//!
//! assert_eq!(status, 0);
//! assert_eq!(stdout, b"Hello Ann, you are 42\n");
//! assert!(stderr.is_empty());
//! ```

use std::env;
use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use logging::HostLog;
use logging_sink::AnsiConsole;

mod command;
mod error;
mod options;

pub use command::{PROGRAM_NAME, clap_command};
pub use error::CliError;
pub use options::{Options, parse_args};

/// Runs the front-end against the process environment.
///
/// `stdout_is_terminal` decides whether `--color auto` emits colors.
pub fn run<I, S, Out, Err>(
    arguments: I,
    stdout: Out,
    stdout_is_terminal: bool,
    stderr: &mut Err,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    run_with_env(
        arguments,
        |name| env::var_os(name),
        stdout,
        stdout_is_terminal,
        stderr,
    )
}

/// Runs the front-end with a caller-supplied environment lookup.
pub fn run_with_env<I, S, F, Out, Err>(
    arguments: I,
    lookup: F,
    mut stdout: Out,
    stdout_is_terminal: bool,
    stderr: &mut Err,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
    F: Fn(&str) -> Option<OsString>,
    Out: Write,
    Err: Write,
{
    let options = match parse_args(arguments, lookup) {
        Ok(options) => options,
        Err(CliError::Usage(error)) if !error.use_stderr() => {
            let _ = write!(stdout, "{}", error.render());
            return 0;
        }
        Err(error) => {
            let _ = report_plain(&error, stderr);
            return error.exit_code();
        }
    };

    let console = AnsiConsole::with_color_mode(stdout, options.color, stdout_is_terminal);
    let log = HostLog::new(console);
    log.set_verbosity(options.verbosity);

    match options.write_to(&log) {
        Ok(()) => 0,
        Err(error) => {
            let error = CliError::from(error);
            if log.report_error(&error).is_err() {
                let _ = report_plain(&error, stderr);
            }
            error.exit_code()
        }
    }
}

/// Converts a status returned by [`run`] into a process exit code.
#[must_use]
pub fn exit_code_from(status: i32) -> ExitCode {
    u8::try_from(status).map_or(ExitCode::FAILURE, ExitCode::from)
}

fn report_plain<W>(error: &CliError, stderr: &mut W) -> std::io::Result<()>
where
    W: Write,
{
    match error {
        CliError::Usage(usage) => write!(stderr, "{}", usage.render()),
        other => writeln!(stderr, "{PROGRAM_NAME}: {other}"),
    }
}
