//! crates/logging-sink/src/color.rs
//! Console color vocabulary shared by every [`Console`](crate::Console) implementation.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The sixteen colors addressable on a classic console.
///
/// The palette matches the conventional 4-bit terminal set: eight "dark"
/// variants plus their bright counterparts. [`ConsoleColor::Gray`] and
/// [`ConsoleColor::Black`] form the customary default foreground/background
/// pair.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ConsoleColor {
    /// Black.
    Black,
    /// Dark blue.
    DarkBlue,
    /// Dark green.
    DarkGreen,
    /// Dark cyan.
    DarkCyan,
    /// Dark red.
    DarkRed,
    /// Dark magenta.
    DarkMagenta,
    /// Dark yellow.
    DarkYellow,
    /// Gray.
    Gray,
    /// Dark gray.
    DarkGray,
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Cyan.
    Cyan,
    /// Red.
    Red,
    /// Magenta.
    Magenta,
    /// Yellow.
    Yellow,
    /// White.
    White,
}

impl ConsoleColor {
    /// Every color in ascending 4-bit index order.
    pub const ALL: [Self; 16] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkCyan,
        Self::DarkRed,
        Self::DarkMagenta,
        Self::DarkYellow,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Cyan,
        Self::Red,
        Self::Magenta,
        Self::Yellow,
        Self::White,
    ];

    /// Returns the lowercase name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::DarkBlue => "dark-blue",
            Self::DarkGreen => "dark-green",
            Self::DarkCyan => "dark-cyan",
            Self::DarkRed => "dark-red",
            Self::DarkMagenta => "dark-magenta",
            Self::DarkYellow => "dark-yellow",
            Self::Gray => "gray",
            Self::DarkGray => "dark-gray",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Red => "red",
            Self::Magenta => "magenta",
            Self::Yellow => "yellow",
            Self::White => "white",
        }
    }
}

impl fmt::Display for ConsoleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<ConsoleColor> for crossterm::style::Color {
    fn from(color: ConsoleColor) -> Self {
        use crossterm::style::Color;

        match color {
            ConsoleColor::Black => Color::Black,
            ConsoleColor::DarkBlue => Color::DarkBlue,
            ConsoleColor::DarkGreen => Color::DarkGreen,
            ConsoleColor::DarkCyan => Color::DarkCyan,
            ConsoleColor::DarkRed => Color::DarkRed,
            ConsoleColor::DarkMagenta => Color::DarkMagenta,
            ConsoleColor::DarkYellow => Color::DarkYellow,
            ConsoleColor::Gray => Color::Grey,
            ConsoleColor::DarkGray => Color::DarkGrey,
            ConsoleColor::Blue => Color::Blue,
            ConsoleColor::Green => Color::Green,
            ConsoleColor::Cyan => Color::Cyan,
            ConsoleColor::Red => Color::Red,
            ConsoleColor::Magenta => Color::Magenta,
            ConsoleColor::Yellow => Color::Yellow,
            ConsoleColor::White => Color::White,
        }
    }
}

/// A foreground/background pair describing the console's color state.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsoleColors {
    /// Text color.
    pub foreground: ConsoleColor,
    /// Cell background color.
    pub background: ConsoleColor,
}

impl ConsoleColors {
    /// Gray text on a black background.
    pub const TERMINAL_DEFAULT: Self = Self::new(ConsoleColor::Gray, ConsoleColor::Black);

    /// Creates a new color pair.
    #[must_use]
    pub const fn new(foreground: ConsoleColor, background: ConsoleColor) -> Self {
        Self {
            foreground,
            background,
        }
    }
}

impl Default for ConsoleColors {
    fn default() -> Self {
        Self::TERMINAL_DEFAULT
    }
}

/// Controls whether a terminal console emits color escape sequences.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorMode {
    /// Colorize only when the output stream is a terminal.
    #[default]
    Auto,
    /// Always colorize.
    Always,
    /// Never colorize.
    Never,
}

impl ColorMode {
    /// Resolves the mode against whether the destination is a terminal.
    #[must_use]
    pub const fn enabled(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }

    /// Returns the lowercase keyword accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a [`ColorMode`] keyword is not recognised.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid color mode '{input}'; expected auto, always, or never")]
pub struct ParseColorModeError {
    input: String,
}

impl ParseColorModeError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        [Self::Auto, Self::Always, Self::Never]
            .into_iter()
            .find(|mode| trimmed.eq_ignore_ascii_case(mode.as_str()))
            .ok_or_else(|| ParseColorModeError {
                input: text.to_owned(),
            })
    }
}
