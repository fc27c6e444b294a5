use std::fmt;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{ResetColor, SetBackgroundColor, SetForegroundColor};

use super::Console;
use crate::color::{ColorMode, ConsoleColor, ConsoleColors};

/// Terminal console that renders colors as ANSI escape sequences.
///
/// The console wraps any [`io::Write`] implementor. Colors are tracked in
/// memory so [`Console::foreground_color`] and [`Console::background_color`]
/// always report the last applied state; escape sequences are only emitted
/// while color output is enabled. Lines are flushed as soon as they are
/// terminated so interleaving with other writers to the same stream stays
/// line-granular.
///
/// # Examples
///
/// ```
/// use logging_sink::{AnsiConsole, Console, ConsoleColor};
///
/// let mut console = AnsiConsole::without_color(Vec::new());
/// console.set_foreground_color(ConsoleColor::Yellow)?;
/// console.write("careful")?;
/// console.reset_color()?;
/// console.write_line()?;
///
/// assert_eq!(console.into_inner(), b"careful\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct AnsiConsole<W> {
    writer: W,
    colors: ConsoleColors,
    defaults: ConsoleColors,
    color_enabled: bool,
}

impl<W> AnsiConsole<W> {
    /// Creates a console that always emits escape sequences.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_defaults(writer, ConsoleColors::TERMINAL_DEFAULT, true)
    }

    /// Creates a console that never emits escape sequences.
    #[must_use]
    pub fn without_color(writer: W) -> Self {
        Self::with_defaults(writer, ConsoleColors::TERMINAL_DEFAULT, false)
    }

    /// Creates a console whose color output follows `mode`.
    ///
    /// `is_terminal` describes the destination; it only matters for
    /// [`ColorMode::Auto`].
    #[must_use]
    pub fn with_color_mode(writer: W, mode: ColorMode, is_terminal: bool) -> Self {
        Self::with_defaults(writer, ConsoleColors::TERMINAL_DEFAULT, mode.enabled(is_terminal))
    }

    /// Creates a console with explicit default colors.
    ///
    /// `defaults` is the state reported before any color is applied and the
    /// state restored by [`Console::reset_color`].
    #[must_use]
    pub fn with_defaults(writer: W, defaults: ConsoleColors, color_enabled: bool) -> Self {
        Self {
            writer,
            colors: defaults,
            defaults,
            color_enabled,
        }
    }

    /// Reports whether escape sequences are emitted.
    #[must_use]
    pub const fn color_enabled(&self) -> bool {
        self.color_enabled
    }

    /// Enables or disables escape sequences for subsequent color changes.
    pub fn set_color_enabled(&mut self, enabled: bool) {
        self.color_enabled = enabled;
    }

    /// Returns the colors restored by [`Console::reset_color`].
    #[must_use]
    pub const fn default_colors(&self) -> ConsoleColors {
        self.defaults
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consumes the console and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl AnsiConsole<io::Stdout> {
    /// Creates a console over standard output, detecting whether it is a terminal.
    #[must_use]
    pub fn stdout(mode: ColorMode) -> Self {
        use is_terminal::IsTerminal;

        let stdout = io::stdout();
        let is_terminal = stdout.is_terminal();
        Self::with_color_mode(stdout, mode, is_terminal)
    }
}

impl<W> Console for AnsiConsole<W>
where
    W: Write,
{
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }

    fn write_line(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }

    fn reset_color(&mut self) -> io::Result<()> {
        if self.color_enabled {
            queue!(self.writer, ResetColor)?;
        }
        self.colors = self.defaults;
        Ok(())
    }

    fn foreground_color(&self) -> ConsoleColor {
        self.colors.foreground
    }

    fn set_foreground_color(&mut self, color: ConsoleColor) -> io::Result<()> {
        if self.color_enabled {
            queue!(self.writer, SetForegroundColor(color.into()))?;
        }
        self.colors.foreground = color;
        Ok(())
    }

    fn background_color(&self) -> ConsoleColor {
        self.colors.background
    }

    fn set_background_color(&mut self, color: ConsoleColor) -> io::Result<()> {
        if self.color_enabled {
            queue!(self.writer, SetBackgroundColor(color.into()))?;
        }
        self.colors.background = color;
        Ok(())
    }
}

impl<W> fmt::Debug for AnsiConsole<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnsiConsole")
            .field("colors", &self.colors)
            .field("defaults", &self.defaults)
            .field("color_enabled", &self.color_enabled)
            .finish_non_exhaustive()
    }
}
