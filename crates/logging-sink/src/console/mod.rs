//! crates/logging-sink/src/console/mod.rs
//! The console capability set consumed by colorizing loggers.

use std::io;

use crate::color::{ConsoleColor, ConsoleColors};

mod ansi;
mod buffer;
mod guard;

pub use ansi::AnsiConsole;
pub use buffer::{BufferConsole, ConsoleSegment};
pub use guard::ColorGuard;

/// A text console with mutable foreground and background colors.
///
/// Implementations track the color state they last applied so callers can
/// read it back. The background observed before any mutation is the console's
/// *ambient* background; loggers capture it once when building their palettes.
///
/// Every mutating method reports failures from the underlying device as
/// [`io::Error`]. Color setters update the tracked state even when the
/// implementation decides not to emit anything (for example, when escape
/// sequences are disabled).
pub trait Console {
    /// Writes `text` using the current colors.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Terminates the current line.
    fn write_line(&mut self) -> io::Result<()>;

    /// Restores the console's default colors.
    fn reset_color(&mut self) -> io::Result<()>;

    /// Returns the current foreground color.
    fn foreground_color(&self) -> ConsoleColor;

    /// Changes the foreground color for subsequent writes.
    fn set_foreground_color(&mut self, color: ConsoleColor) -> io::Result<()>;

    /// Returns the current background color.
    fn background_color(&self) -> ConsoleColor;

    /// Changes the background color for subsequent writes.
    fn set_background_color(&mut self, color: ConsoleColor) -> io::Result<()>;

    /// Returns the current foreground/background pair.
    fn colors(&self) -> ConsoleColors {
        ConsoleColors::new(self.foreground_color(), self.background_color())
    }

    /// Applies both colors, background first.
    fn set_colors(&mut self, colors: ConsoleColors) -> io::Result<()> {
        self.set_background_color(colors.background)?;
        self.set_foreground_color(colors.foreground)
    }
}

impl<C> Console for &mut C
where
    C: Console + ?Sized,
{
    fn write(&mut self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }

    fn write_line(&mut self) -> io::Result<()> {
        (**self).write_line()
    }

    fn reset_color(&mut self) -> io::Result<()> {
        (**self).reset_color()
    }

    fn foreground_color(&self) -> ConsoleColor {
        (**self).foreground_color()
    }

    fn set_foreground_color(&mut self, color: ConsoleColor) -> io::Result<()> {
        (**self).set_foreground_color(color)
    }

    fn background_color(&self) -> ConsoleColor {
        (**self).background_color()
    }

    fn set_background_color(&mut self, color: ConsoleColor) -> io::Result<()> {
        (**self).set_background_color(color)
    }
}

impl<C> Console for Box<C>
where
    C: Console + ?Sized,
{
    fn write(&mut self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }

    fn write_line(&mut self) -> io::Result<()> {
        (**self).write_line()
    }

    fn reset_color(&mut self) -> io::Result<()> {
        (**self).reset_color()
    }

    fn foreground_color(&self) -> ConsoleColor {
        (**self).foreground_color()
    }

    fn set_foreground_color(&mut self, color: ConsoleColor) -> io::Result<()> {
        (**self).set_foreground_color(color)
    }

    fn background_color(&self) -> ConsoleColor {
        (**self).background_color()
    }

    fn set_background_color(&mut self, color: ConsoleColor) -> io::Result<()> {
        (**self).set_background_color(color)
    }
}
