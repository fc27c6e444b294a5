//! crates/logging/src/palette.rs
//! Per-level console colors.

use std::collections::HashMap;

use logging_sink::{ConsoleColor, ConsoleColors};

use crate::format::FormatToken;
use crate::level::LogLevel;

/// The four colors used to render a message of one [`LogLevel`].
///
/// Literal text uses [`background`](Self::background) and
/// [`foreground`](Self::foreground); substituted arguments use the argument
/// pair so embedded values stand out from the surrounding text.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ConsolePalette {
    /// Background behind literal text.
    pub background: ConsoleColor,
    /// Literal text color.
    pub foreground: ConsoleColor,
    /// Background behind substituted arguments.
    pub argument_background: ConsoleColor,
    /// Substituted argument color.
    pub argument_foreground: ConsoleColor,
}

impl ConsolePalette {
    /// Creates a palette.
    #[must_use]
    pub const fn new(
        background: ConsoleColor,
        foreground: ConsoleColor,
        argument_background: ConsoleColor,
        argument_foreground: ConsoleColor,
    ) -> Self {
        Self {
            background,
            foreground,
            argument_background,
            argument_foreground,
        }
    }

    /// Colors for literal text.
    #[must_use]
    pub const fn base(&self) -> ConsoleColors {
        ConsoleColors::new(self.foreground, self.background)
    }

    /// Colors for substituted arguments.
    #[must_use]
    pub const fn argument(&self) -> ConsoleColors {
        ConsoleColors::new(self.argument_foreground, self.argument_background)
    }

    /// Colors for `token`: argument colors for placeholders, base colors otherwise.
    #[must_use]
    pub const fn colors_for(&self, token: &FormatToken<'_>) -> ConsoleColors {
        match token {
            FormatToken::Property(_) => self.argument(),
            FormatToken::Literal(_) => self.base(),
        }
    }

    /// The alert palette shared by [`LogLevel::Fatal`] and [`LogLevel::Error`].
    ///
    /// Independent of the terminal background so failures stay legible on
    /// any theme.
    #[must_use]
    pub const fn alert() -> Self {
        Self::new(
            ConsoleColor::DarkRed,
            ConsoleColor::White,
            ConsoleColor::Red,
            ConsoleColor::White,
        )
    }

    /// The default palette for `level` on a console whose background is `ambient`.
    #[must_use]
    pub const fn for_level(level: LogLevel, ambient: ConsoleColor) -> Self {
        match level {
            LogLevel::Fatal | LogLevel::Error => Self::alert(),
            LogLevel::Warning => {
                Self::new(ambient, ConsoleColor::Yellow, ambient, ConsoleColor::White)
            }
            LogLevel::Information => Self::new(
                ambient,
                ConsoleColor::White,
                ConsoleColor::DarkBlue,
                ConsoleColor::White,
            ),
            LogLevel::Verbose => {
                Self::new(ambient, ConsoleColor::Gray, ambient, ConsoleColor::White)
            }
            LogLevel::Debug => {
                Self::new(ambient, ConsoleColor::DarkGray, ambient, ConsoleColor::Gray)
            }
        }
    }
}

/// Mapping from [`LogLevel`] to [`ConsolePalette`], built once per logger.
///
/// Lookups never fail: a level without an entry resolves to the debug
/// palette captured at construction.
///
/// # Examples
///
/// ```
/// use logging::{ConsolePalette, LogLevel, PaletteTable};
/// use logging_sink::ConsoleColor;
///
/// let mut table = PaletteTable::new(ConsoleColor::Black);
/// assert_eq!(table.get(LogLevel::Error), ConsolePalette::alert());
///
/// table.remove(LogLevel::Warning);
/// assert_eq!(table.get(LogLevel::Warning), table.get(LogLevel::Debug));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaletteTable {
    entries: HashMap<LogLevel, ConsolePalette>,
    fallback: ConsolePalette,
    ambient: ConsoleColor,
}

impl PaletteTable {
    /// Builds the default table against the console's ambient background.
    #[must_use]
    pub fn new(ambient: ConsoleColor) -> Self {
        let entries = LogLevel::ALL
            .into_iter()
            .map(|level| (level, ConsolePalette::for_level(level, ambient)))
            .collect();

        Self {
            entries,
            fallback: ConsolePalette::for_level(LogLevel::Debug, ambient),
            ambient,
        }
    }

    /// Returns the palette for `level`, or the debug palette when unmapped.
    #[must_use]
    pub fn get(&self, level: LogLevel) -> ConsolePalette {
        self.entries.get(&level).copied().unwrap_or(self.fallback)
    }

    /// Reports whether `level` has its own entry.
    #[must_use]
    pub fn contains(&self, level: LogLevel) -> bool {
        self.entries.contains_key(&level)
    }

    /// Replaces the entry for `level`, returning the previous one.
    pub fn insert(&mut self, level: LogLevel, palette: ConsolePalette) -> Option<ConsolePalette> {
        self.entries.insert(level, palette)
    }

    /// Removes the entry for `level` so it resolves to the fallback.
    pub fn remove(&mut self, level: LogLevel) -> Option<ConsolePalette> {
        self.entries.remove(&level)
    }

    /// The background the table was built against.
    #[must_use]
    pub const fn ambient_background(&self) -> ConsoleColor {
        self.ambient
    }
}
