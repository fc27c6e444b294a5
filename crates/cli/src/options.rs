//! crates/cli/src/options.rs
//! Parsed options layered over environment configuration.

use std::ffi::OsString;
use std::fmt::Display;

use clap::ArgMatches;
use logging::{HostLog, LogLevel, LoggerConfig, Verbosity, WriteError};
use logging_sink::{ColorMode, Console};

use crate::command::{ARGS, COLOR, FORMAT, LEVEL, MESSAGE_VERBOSITY, VERBOSITY, clap_command};
use crate::error::CliError;

/// Fully resolved options for one invocation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Options {
    /// Logger threshold.
    pub verbosity: Verbosity,
    /// Level of the message.
    pub level: LogLevel,
    /// Verbosity of the message.
    pub message_verbosity: Verbosity,
    /// Color mode of the console.
    pub color: ColorMode,
    /// Message template.
    pub format: String,
    /// Positional arguments.
    pub args: Vec<String>,
}

impl Options {
    /// Resolves options from parsed matches; flags take precedence over `config`.
    pub fn from_matches(matches: &ArgMatches, config: LoggerConfig) -> Self {
        let verbosity = matches
            .get_one::<Verbosity>(VERBOSITY)
            .copied()
            .unwrap_or_else(|| config.resolve_verbosity());
        let level = matches
            .get_one::<LogLevel>(LEVEL)
            .copied()
            .unwrap_or(LogLevel::Information);
        let message_verbosity = matches
            .get_one::<Verbosity>(MESSAGE_VERBOSITY)
            .copied()
            .unwrap_or_else(|| level.default_verbosity());
        let color = matches
            .get_one::<ColorMode>(COLOR)
            .copied()
            .unwrap_or(config.color);
        let format = matches
            .get_one::<String>(FORMAT)
            .cloned()
            .unwrap_or_default();
        let args = matches
            .get_many::<String>(ARGS)
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        Self {
            verbosity,
            level,
            message_verbosity,
            color,
            format,
            args,
        }
    }

    /// Writes the message through `log`.
    pub fn write_to<C>(&self, log: &HostLog<C>) -> Result<(), WriteError>
    where
        C: Console,
    {
        let args: Vec<&dyn Display> = self.args.iter().map(|arg| arg as &dyn Display).collect();
        log.write(self.message_verbosity, self.level, &self.format, &args)
    }
}

/// Parses `arguments` (program name first) and layers them over the
/// configuration read through `lookup`.
///
/// Arguments are parsed before the environment is read, so `--help` and
/// `--version` succeed even when a `HOSTLOG_*` variable is invalid.
///
/// # Errors
///
/// Returns [`CliError::Usage`] for rejected arguments and
/// [`CliError::Config`] for invalid environment values.
pub fn parse_args<I, S, F>(arguments: I, lookup: F) -> Result<Options, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
    F: Fn(&str) -> Option<OsString>,
{
    let matches = clap_command().try_get_matches_from(arguments)?;
    let config = LoggerConfig::from_lookup(lookup)?;
    Ok(Options::from_matches(&matches, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::{COLOR_ENV, VERBOSITY_ENV};

    fn env(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<OsString> {
        let pairs = pairs.to_vec();
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| OsString::from(value))
        }
    }

    fn parse(args: &[&str]) -> Options {
        let mut argv = vec!["hostlog"];
        argv.extend_from_slice(args);
        parse_args(argv, env(&[(VERBOSITY_ENV, "normal")])).expect("arguments parse")
    }

    #[test]
    fn defaults_use_information_level() {
        let options = parse(&["hello"]);
        assert_eq!(options.level, LogLevel::Information);
        assert_eq!(options.message_verbosity, Verbosity::Normal);
        assert_eq!(options.verbosity, Verbosity::Normal);
        assert_eq!(options.color, ColorMode::Auto);
        assert_eq!(options.format, "hello");
        assert!(options.args.is_empty());
    }

    #[test]
    fn message_verbosity_follows_level() {
        let options = parse(&["--level", "debug", "x"]);
        assert_eq!(options.message_verbosity, Verbosity::Diagnostic);

        let options = parse(&["--level", "warn", "x"]);
        assert_eq!(options.level, LogLevel::Warning);
        assert_eq!(options.message_verbosity, Verbosity::Minimal);
    }

    #[test]
    fn explicit_message_verbosity_wins() {
        let options = parse(&["-l", "debug", "-m", "q", "x"]);
        assert_eq!(options.message_verbosity, Verbosity::Quiet);
    }

    #[test]
    fn flags_override_environment() {
        let options = parse_args(
            ["hostlog", "--verbosity", "verbose", "--color", "always", "x"],
            env(&[(VERBOSITY_ENV, "quiet"), (COLOR_ENV, "never")]),
        )
        .expect("arguments parse");

        assert_eq!(options.verbosity, Verbosity::Verbose);
        assert_eq!(options.color, ColorMode::Always);
    }

    #[test]
    fn environment_applies_without_flags() {
        let options = parse_args(
            ["hostlog", "x"],
            env(&[(VERBOSITY_ENV, "minimal"), (COLOR_ENV, "never")]),
        )
        .expect("arguments parse");

        assert_eq!(options.verbosity, Verbosity::Minimal);
        assert_eq!(options.color, ColorMode::Never);
    }

    #[test]
    fn hyphenated_arguments_are_positional() {
        let options = parse(&["{0} degrees", "-5"]);
        assert_eq!(options.args, vec!["-5".to_owned()]);
    }

    #[test]
    fn invalid_values_are_rejected() {
        for argv in [
            &["hostlog", "--verbosity", "loud", "x"][..],
            &["hostlog", "--level", "panic", "x"],
            &["hostlog", "--color", "sometimes", "x"],
            &["hostlog"],
        ] {
            let error = parse_args(argv.iter().copied(), env(&[])).expect_err("rejected");
            assert!(matches!(error, CliError::Usage(_)), "{argv:?}");
        }
    }

    #[test]
    fn invalid_environment_is_a_config_error() {
        let error = parse_args(["hostlog", "x"], env(&[(COLOR_ENV, "rainbow")]))
            .expect_err("rainbow is not a color mode");
        assert!(matches!(error, CliError::Config(_)));
    }

    #[test]
    fn help_is_reported_before_environment_is_read() {
        let error = parse_args(["hostlog", "--help"], env(&[(COLOR_ENV, "rainbow")]))
            .expect_err("help short-circuits parsing");
        match error {
            CliError::Usage(usage) => assert!(!usage.use_stderr()),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
