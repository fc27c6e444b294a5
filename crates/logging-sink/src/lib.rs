#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the console surface used by the `hostlog`
//! workspace. The [`Console`] trait captures the capability set a colorizing
//! logger needs: write text, terminate lines, and read or change the current
//! foreground and background colors. Higher layers stay polymorphic over that
//! trait so the same logger drives a real terminal, an in-memory buffer, or a
//! test double.
//!
//! # Design
//!
//! - [`AnsiConsole`] wraps any [`std::io::Write`] implementor and renders color
//!   changes as ANSI escape sequences via `crossterm`. Escape output can be
//!   disabled ([`ColorMode`]) without changing the tracked color state.
//! - [`BufferConsole`] records each written run together with the colors that
//!   were active, which makes colorization observable in tests.
//! - [`ColorGuard`] is an RAII scope over a console: dropping it resets colors
//!   and terminates the line on every exit path.
//!
//! # Invariants
//!
//! - A console's reported colors always equal the last colors applied, or its
//!   defaults after [`Console::reset_color`].
//! - [`ColorGuard`] performs exactly one reset and one line termination,
//!   either through [`ColorGuard::finish`] or on drop.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{BufferConsole, ColorGuard, Console, ConsoleColor, ConsoleColors};
//!
//! let mut console = BufferConsole::new();
//! {
//!     let mut line = ColorGuard::new(&mut console);
//!     line.set_colors(ConsoleColors::new(ConsoleColor::White, ConsoleColor::DarkRed))?;
//!     line.write("build failed")?;
//!     line.finish()?;
//! }
//!
//! assert_eq!(console.text(), "build failed\n");
//! assert_eq!(console.colors(), ConsoleColors::TERMINAL_DEFAULT);
//! # Ok::<(), std::io::Error>(())
//! ```

mod color;
mod console;

pub use color::{ColorMode, ConsoleColor, ConsoleColors, ParseColorModeError};
pub use console::{AnsiConsole, BufferConsole, ColorGuard, Console, ConsoleSegment};
