//! Integration tests for the colorized write protocol.
//!
//! These tests drive [`HostLog`] through its public API and verify the
//! all-or-nothing rendering, color restoration, structured forwarding and
//! mutual exclusion guarantees.

use std::fmt::Display;
use std::io;
use std::sync::Arc;
use std::thread;

use logging::{
    HostLog, LogLevel, MemorySink, RenderError, Severity, SinkError, StructuredSink, Verbosity,
    WriteError,
};
use logging_sink::{AnsiConsole, BufferConsole, Console, ConsoleColor, ConsoleColors};

fn logger() -> (HostLog<BufferConsole>, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let log = HostLog::with_sink(BufferConsole::new(), Arc::clone(&sink));
    log.set_verbosity(Verbosity::Diagnostic);
    (log, sink)
}

// ============================================================================
// Index Safety
// ============================================================================

/// Verifies an out-of-range placeholder fails before any output is produced.
#[test]
fn out_of_range_placeholder_produces_no_output() {
    let (log, sink) = logger();
    let error = log
        .write(Verbosity::Quiet, LogLevel::Error, "{0} and {5}", &[&"a", &"b"])
        .expect_err("index 5 is out of range");

    assert!(matches!(
        error,
        WriteError::Render(RenderError::ArgumentOutOfRange { index: 5, len: 2 })
    ));
    assert!(log.with_console(|console| console.segments().is_empty()));
    assert_eq!(log.with_console(|console| console.reset_count()), 0);
    assert!(sink.is_empty());
}

/// Verifies a failed write does not leave the console locked.
#[test]
fn console_is_released_after_render_failure() {
    let (log, _) = logger();
    let log = Arc::new(log);

    let failing = Arc::clone(&log);
    thread::spawn(move || {
        let _ = failing.information("{3}", &[]);
    })
    .join()
    .expect("thread completes");

    log.information("after", &[]).expect("write succeeds");
    assert_eq!(log.with_console(|console| console.lines()), vec!["after"]);
}

// ============================================================================
// Color Handling
// ============================================================================

/// Verifies colors after a write equal the colors before it, for every level.
///
/// Writes reset the console to its defaults, so this holds only while the
/// console starts out at its default colors, as it does here.
#[test]
fn colors_are_restored_for_every_level() {
    let console = BufferConsole::with_background(ConsoleColor::DarkBlue);
    let log = HostLog::with_sink(console, MemorySink::new());
    log.set_verbosity(Verbosity::Diagnostic);
    let before = log.with_console(|console| console.colors());

    for level in LogLevel::ALL {
        log.write(Verbosity::Quiet, level, "{0}: {1}", &[&level, &"value"])
            .expect("write succeeds");
        assert_eq!(log.with_console(|console| console.colors()), before, "{level}");
    }
}

/// Verifies colors are restored when the console fails mid-line.
#[test]
fn colors_are_restored_after_console_failure() {
    let log = HostLog::with_sink(BufferConsole::new().failing_after(2), MemorySink::new());
    log.set_verbosity(Verbosity::Normal);

    let error = log
        .warning("one {0} two {1}", &[&1, &2])
        .expect_err("third segment fails");

    assert!(matches!(error, WriteError::Console(ref inner) if inner.kind() == io::ErrorKind::BrokenPipe));
    assert_eq!(
        log.with_console(|console| console.colors()),
        ConsoleColors::TERMINAL_DEFAULT
    );
}

/// Verifies literal and argument segments carry the level's palette colors.
#[test]
fn segments_alternate_between_base_and_argument_colors() {
    let (log, _) = logger();
    log.error("copy {0} to {1}", &[&"a", &"b"]).expect("write succeeds");

    let palette = log.palettes().get(LogLevel::Error);
    let colors: Vec<_> = log.with_console(|console| {
        console
            .segments()
            .iter()
            .filter(|segment| segment.text != "\n")
            .map(|segment| segment.colors)
            .collect()
    });
    assert_eq!(
        colors,
        vec![
            palette.base(),
            palette.argument(),
            palette.base(),
            palette.argument()
        ]
    );
    assert_eq!(palette.background, ConsoleColor::DarkRed);
}

/// Verifies the ANSI console emits escape sequences and ends with a reset.
#[test]
fn ansi_console_wraps_line_in_color_codes() {
    let log = HostLog::with_sink(AnsiConsole::new(Vec::new()), MemorySink::new());
    log.set_verbosity(Verbosity::Normal);
    log.information("built {0}", &[&"app"]).expect("write succeeds");

    let output = String::from_utf8(log.into_console().into_inner()).expect("utf-8 output");
    assert!(output.starts_with("\u{1b}["), "{output:?}");
    assert!(output.contains("built "));
    assert!(output.contains("app"));
    assert!(output.ends_with("\u{1b}[0m\n"), "{output:?}");
}

/// Verifies a colorless ANSI console writes plain text.
#[test]
fn ansi_console_without_color_writes_plain_line() {
    let log = HostLog::with_sink(AnsiConsole::without_color(Vec::new()), MemorySink::new());
    log.set_verbosity(Verbosity::Normal);
    log.information("Hello {0}, you are {1}", &[&"Ann", &42])
        .expect("write succeeds");

    let output = log.into_console().into_inner();
    assert_eq!(output, b"Hello Ann, you are 42\n".to_vec());
}

// ============================================================================
// Structured Sink
// ============================================================================

struct FailingSink;

impl StructuredSink for FailingSink {
    fn write(&self, _: Severity, _: &str, _: &[&dyn Display]) -> Result<(), SinkError> {
        Err(SinkError::rejected("collector unavailable"))
    }
}

/// Verifies the sink receives severities mapped from every level.
#[test]
fn sink_receives_mapped_severity_for_every_level() {
    let (log, sink) = logger();
    for level in LogLevel::ALL {
        log.write(Verbosity::Quiet, level, "x", &[]).expect("write succeeds");
    }

    let severities: Vec<_> = sink.drain().into_iter().map(|event| event.severity).collect();
    let expected: Vec<_> = LogLevel::ALL.into_iter().map(LogLevel::severity).collect();
    assert_eq!(severities, expected);
}

/// Verifies a sink failure is returned after the line was written and reset.
#[test]
fn sink_failure_surfaces_after_console_reset() {
    let log = HostLog::with_sink(BufferConsole::new(), FailingSink);
    log.set_verbosity(Verbosity::Normal);

    let error = log.error("boom", &[]).expect_err("sink fails");

    assert!(matches!(error, WriteError::Sink(_)));
    assert!(error.to_string().contains("collector unavailable"));
    assert_eq!(log.with_console(|console| console.text()), "boom\n");
    assert_eq!(log.with_console(|console| console.reset_count()), 1);
}

// ============================================================================
// Mutual Exclusion
// ============================================================================

/// Console that yields between writes so unsynchronized access would interleave.
#[derive(Default)]
struct YieldingConsole {
    inner: BufferConsole,
}

impl Console for YieldingConsole {
    fn write(&mut self, text: &str) -> io::Result<()> {
        thread::yield_now();
        self.inner.write(text)
    }

    fn write_line(&mut self) -> io::Result<()> {
        thread::yield_now();
        self.inner.write_line()
    }

    fn reset_color(&mut self) -> io::Result<()> {
        self.inner.reset_color()
    }

    fn foreground_color(&self) -> ConsoleColor {
        self.inner.foreground_color()
    }

    fn set_foreground_color(&mut self, color: ConsoleColor) -> io::Result<()> {
        self.inner.set_foreground_color(color)
    }

    fn background_color(&self) -> ConsoleColor {
        self.inner.background_color()
    }

    fn set_background_color(&mut self, color: ConsoleColor) -> io::Result<()> {
        self.inner.set_background_color(color)
    }
}

/// Verifies concurrent multi-token writes never interleave within a line.
#[test]
fn concurrent_writes_never_interleave() {
    const THREADS: usize = 8;
    const WRITES: usize = 50;

    let log = Arc::new(HostLog::with_sink(YieldingConsole::default(), MemorySink::new()));
    log.set_verbosity(Verbosity::Normal);

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let log = Arc::clone(&log);
            thread::spawn(move || {
                for write in 0..WRITES {
                    log.information(
                        "[{0}] write {1} of {2} from {0}",
                        &[&thread_id, &write, &WRITES],
                    )
                    .expect("write succeeds");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("writer thread completes");
    }

    let log = Arc::try_unwrap(log).expect("all writers finished");
    let lines = log.into_console().inner.lines();
    assert_eq!(lines.len(), THREADS * WRITES);

    for line in &lines {
        let (prefix, rest) = line.split_once("] write ").expect("line starts with a tag");
        let thread_id = prefix.trim_start_matches('[');
        let expected_suffix = format!(" of {WRITES} from {thread_id}");
        assert!(rest.ends_with(&expected_suffix), "interleaved line: {line:?}");
    }

    for thread_id in 0..THREADS {
        let own: Vec<_> = lines
            .iter()
            .filter(|line| line.starts_with(&format!("[{thread_id}]")))
            .collect();
        assert_eq!(own.len(), WRITES);
        for (write, line) in own.iter().enumerate() {
            assert!(
                line.starts_with(&format!("[{thread_id}] write {write} ")),
                "out of order: {line:?}"
            );
        }
    }
}
