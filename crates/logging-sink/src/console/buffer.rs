use std::io;

use super::Console;
use crate::color::{ConsoleColor, ConsoleColors};

/// A run of text written while a single color pair was active.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConsoleSegment {
    /// The text written. Line terminators are recorded as `"\n"` segments.
    pub text: String,
    /// The colors active when the text was written.
    pub colors: ConsoleColors,
}

/// In-memory console that records every write together with its colors.
///
/// The console is primarily a test double: it captures the colorized segments
/// a logger emits, counts color resets, and can be configured to fail after a
/// fixed number of writes to exercise error paths.
///
/// # Examples
///
/// ```
/// use logging_sink::{BufferConsole, Console, ConsoleColor};
///
/// let mut console = BufferConsole::new();
/// console.set_foreground_color(ConsoleColor::Yellow)?;
/// console.write("warn")?;
/// console.reset_color()?;
/// console.write_line()?;
///
/// assert_eq!(console.text(), "warn\n");
/// assert_eq!(console.segments()[0].colors.foreground, ConsoleColor::Yellow);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct BufferConsole {
    segments: Vec<ConsoleSegment>,
    colors: ConsoleColors,
    defaults: ConsoleColors,
    resets: usize,
    remaining_writes: Option<usize>,
}

impl BufferConsole {
    /// Creates a console with the terminal default colors.
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(ConsoleColors::TERMINAL_DEFAULT)
    }

    /// Creates a console whose default (and initial) colors are `defaults`.
    #[must_use]
    pub fn with_defaults(defaults: ConsoleColors) -> Self {
        Self {
            segments: Vec::new(),
            colors: defaults,
            defaults,
            resets: 0,
            remaining_writes: None,
        }
    }

    /// Creates a console whose ambient background is `background`.
    #[must_use]
    pub fn with_background(background: ConsoleColor) -> Self {
        Self::with_defaults(ConsoleColors::new(
            ConsoleColors::TERMINAL_DEFAULT.foreground,
            background,
        ))
    }

    /// Makes [`Console::write`] and [`Console::write_line`] fail once `count`
    /// further writes have succeeded.
    #[must_use]
    pub fn failing_after(mut self, count: usize) -> Self {
        self.remaining_writes = Some(count);
        self
    }

    /// Returns the recorded segments in write order.
    #[must_use]
    pub fn segments(&self) -> &[ConsoleSegment] {
        &self.segments
    }

    /// Returns the plain text written so far.
    #[must_use]
    pub fn text(&self) -> String {
        self.segments.iter().map(|segment| segment.text.as_str()).collect()
    }

    /// Returns the written text split into lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_owned).collect()
    }

    /// Returns how many times [`Console::reset_color`] was called.
    #[must_use]
    pub const fn reset_count(&self) -> usize {
        self.resets
    }

    /// Discards recorded output while keeping the current colors.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    fn record(&mut self, text: &str) -> io::Result<()> {
        if let Some(remaining) = self.remaining_writes.as_mut() {
            if *remaining == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::BrokenPipe,
                    "console rejected write",
                ));
            }
            *remaining -= 1;
        }

        match self.segments.last_mut() {
            Some(last) if last.colors == self.colors && !last.text.ends_with('\n') && text != "\n" => {
                last.text.push_str(text);
            }
            _ => self.segments.push(ConsoleSegment {
                text: text.to_owned(),
                colors: self.colors,
            }),
        }
        Ok(())
    }
}

impl Default for BufferConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for BufferConsole {
    fn write(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.record(text)
    }

    fn write_line(&mut self) -> io::Result<()> {
        self.record("\n")
    }

    fn reset_color(&mut self) -> io::Result<()> {
        self.resets += 1;
        self.colors = self.defaults;
        Ok(())
    }

    fn foreground_color(&self) -> ConsoleColor {
        self.colors.foreground
    }

    fn set_foreground_color(&mut self, color: ConsoleColor) -> io::Result<()> {
        self.colors.foreground = color;
        Ok(())
    }

    fn background_color(&self) -> ConsoleColor {
        self.colors.background
    }

    fn set_background_color(&mut self, color: ConsoleColor) -> io::Result<()> {
        self.colors.background = color;
        Ok(())
    }
}
