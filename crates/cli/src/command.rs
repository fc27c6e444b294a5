//! crates/cli/src/command.rs
//! clap command definition.

use std::str::FromStr;

use clap::{Arg, ArgAction, Command};
use logging::{LogLevel, Verbosity};
use logging_sink::ColorMode;

/// Program name used in usage and error text.
pub const PROGRAM_NAME: &str = "hostlog";

pub(crate) const VERBOSITY: &str = "verbosity";
pub(crate) const LEVEL: &str = "level";
pub(crate) const MESSAGE_VERBOSITY: &str = "message-verbosity";
pub(crate) const COLOR: &str = "color";
pub(crate) const FORMAT: &str = "format";
pub(crate) const ARGS: &str = "args";

/// Builds the command-line definition.
pub fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Write one colorized message through the host logger")
        .arg(
            Arg::new(VERBOSITY)
                .long(VERBOSITY)
                .short('v')
                .value_name("LEVEL")
                .help("Logger threshold: quiet, minimal, normal, verbose or diagnostic")
                .value_parser(Verbosity::from_str),
        )
        .arg(
            Arg::new(LEVEL)
                .long(LEVEL)
                .short('l')
                .value_name("LEVEL")
                .help("Message level: fatal, error, warning, information, verbose or debug")
                .value_parser(LogLevel::from_str),
        )
        .arg(
            Arg::new(MESSAGE_VERBOSITY)
                .long(MESSAGE_VERBOSITY)
                .short('m')
                .value_name("LEVEL")
                .help("Verbosity of the message; defaults to the level's own verbosity")
                .value_parser(Verbosity::from_str),
        )
        .arg(
            Arg::new(COLOR)
                .long(COLOR)
                .value_name("WHEN")
                .help("Emit colors: auto, always or never")
                .value_parser(ColorMode::from_str),
        )
        .arg(
            Arg::new(FORMAT)
                .value_name("FORMAT")
                .help("Message template with {index} placeholders")
                .required(true),
        )
        .arg(
            Arg::new(ARGS)
                .value_name("ARGS")
                .help("Positional arguments substituted into FORMAT")
                .action(ArgAction::Append)
                .num_args(0..)
                .allow_hyphen_values(true),
        )
}
