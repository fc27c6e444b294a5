//! crates/logging/src/config.rs
//! Logger configuration sourced from the environment.

use std::env;
use std::ffi::OsString;

use logging_sink::{ColorMode, ParseColorModeError};
use thiserror::Error;

use crate::verbosity::{ParseVerbosityError, Verbosity};

/// Environment variable holding the initial verbosity threshold.
pub const VERBOSITY_ENV: &str = "HOSTLOG_VERBOSITY";

/// Environment variable selecting the color mode.
pub const COLOR_ENV: &str = "HOSTLOG_COLOR";

/// Environment variable holding the `tracing` filter directive.
pub const TRACE_ENV: &str = "HOSTLOG_TRACE";

/// Invalid configuration value.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable held text that is not valid Unicode.
    #[error("{variable} is not valid unicode")]
    NotUnicode {
        /// The offending variable.
        variable: &'static str,
    },
    /// The verbosity variable could not be parsed.
    #[error("invalid HOSTLOG_VERBOSITY: {0}")]
    Verbosity(#[from] ParseVerbosityError),
    /// The color variable could not be parsed.
    #[error("invalid HOSTLOG_COLOR: {0}")]
    Color(#[from] ParseColorModeError),
}

/// Settings used to construct a logger.
///
/// Fields left unset fall back to environment-sensitive defaults.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Explicit threshold; `None` selects [`Verbosity::initial`].
    pub verbosity: Option<Verbosity>,
    /// Whether escape sequences are emitted.
    pub color: ColorMode,
}

impl LoggerConfig {
    /// Reads [`VERBOSITY_ENV`] and [`COLOR_ENV`] from the process environment.
    ///
    /// Unset or empty variables leave the corresponding field at its default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var_os(name))
    }

    /// Same as [`from_env`](Self::from_env) with a caller-supplied lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let mut config = Self::default();

        if let Some(value) = read(&lookup, VERBOSITY_ENV)? {
            config.verbosity = Some(value.parse()?);
        }
        if let Some(value) = read(&lookup, COLOR_ENV)? {
            config.color = value.parse()?;
        }

        Ok(config)
    }

    /// The configured threshold, or [`Verbosity::initial`] when unset.
    #[must_use]
    pub fn resolve_verbosity(&self) -> Verbosity {
        self.verbosity.unwrap_or_else(Verbosity::initial)
    }

    /// Overrides the threshold.
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = Some(verbosity);
        self
    }

    /// Overrides the color mode.
    #[must_use]
    pub const fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }
}

fn read<F>(lookup: &F, variable: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<OsString>,
{
    let Some(value) = lookup(variable) else {
        return Ok(None);
    };
    let value = value
        .into_string()
        .map_err(|_| ConfigError::NotUnicode { variable })?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let map: HashMap<String, OsString> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), OsString::from(value)))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = LoggerConfig::from_lookup(lookup(&[])).expect("valid");
        assert_eq!(config, LoggerConfig::default());
        assert_eq!(config.color, ColorMode::Auto);
        assert!(config.verbosity.is_none());
    }

    #[test]
    fn reads_both_variables() {
        let config = LoggerConfig::from_lookup(lookup(&[
            (VERBOSITY_ENV, "Verbose"),
            (COLOR_ENV, "never"),
        ]))
        .expect("valid");

        assert_eq!(config.verbosity, Some(Verbosity::Verbose));
        assert_eq!(config.color, ColorMode::Never);
        assert_eq!(config.resolve_verbosity(), Verbosity::Verbose);
    }

    #[test]
    fn blank_values_are_ignored() {
        let config =
            LoggerConfig::from_lookup(lookup(&[(VERBOSITY_ENV, "  "), (COLOR_ENV, "")]))
                .expect("valid");
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn invalid_verbosity_is_reported() {
        let error = LoggerConfig::from_lookup(lookup(&[(VERBOSITY_ENV, "loud")]))
            .expect_err("loud is not a verbosity");
        assert!(matches!(error, ConfigError::Verbosity(_)));
        assert!(error.to_string().starts_with("invalid HOSTLOG_VERBOSITY"));
    }

    #[test]
    fn invalid_color_is_reported() {
        let error = LoggerConfig::from_lookup(lookup(&[(COLOR_ENV, "sometimes")]))
            .expect_err("sometimes is not a color mode");
        assert!(matches!(error, ConfigError::Color(_)));
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_value_is_reported() {
        use std::os::unix::ffi::OsStringExt;

        let error = LoggerConfig::from_lookup(|name| {
            (name == COLOR_ENV).then(|| OsString::from_vec(vec![0xff, 0xfe]))
        })
        .expect_err("bytes are not unicode");
        assert!(matches!(
            error,
            ConfigError::NotUnicode { variable: COLOR_ENV }
        ));
    }

    #[test]
    fn builders_override_fields() {
        let config = LoggerConfig::default()
            .with_verbosity(Verbosity::Quiet)
            .with_color(ColorMode::Always);
        assert_eq!(config.resolve_verbosity(), Verbosity::Quiet);
        assert_eq!(config.color, ColorMode::Always);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let config = LoggerConfig::default().with_verbosity(Verbosity::Minimal);
        let json = serde_json::to_string(&config).expect("serializes");
        let back: LoggerConfig = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, config);
    }
}
