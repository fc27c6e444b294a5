//! Integration tests for the verbosity gate.
//!
//! A message must reach the console and the structured sink exactly when its
//! verbosity does not exceed the logger's threshold.

use std::sync::Arc;

use logging::{HostLog, LogLevel, MemorySink, Verbosity};
use logging_sink::BufferConsole;
use proptest::prelude::*;

fn logger(threshold: Verbosity) -> (HostLog<BufferConsole>, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let log = HostLog::with_sink(BufferConsole::new(), Arc::clone(&sink));
    log.set_verbosity(threshold);
    (log, sink)
}

fn verbosity() -> impl Strategy<Value = Verbosity> {
    prop::sample::select(Verbosity::ALL.to_vec())
}

fn level() -> impl Strategy<Value = LogLevel> {
    prop::sample::select(LogLevel::ALL.to_vec())
}

// ============================================================================
// Exhaustive Pair Tests
// ============================================================================

/// Verifies output appears iff message verbosity <= threshold for every pair.
#[test]
fn every_verbosity_pair_follows_the_gate() {
    for threshold in Verbosity::ALL {
        for message in Verbosity::ALL {
            let (log, sink) = logger(threshold);
            log.write(message, LogLevel::Information, "m", &[])
                .expect("write succeeds");

            let written = !log.with_console(|console| console.text()).is_empty();
            assert_eq!(written, message <= threshold, "{message} at {threshold}");
            assert_eq!(sink.len(), usize::from(message <= threshold));
        }
    }
}

/// Verifies Quiet messages are written even at the lowest threshold.
#[test]
fn quiet_messages_are_always_written() {
    let (log, _) = logger(Verbosity::Quiet);
    log.write(Verbosity::Quiet, LogLevel::Debug, "always", &[])
        .expect("write succeeds");
    assert_eq!(log.with_console(|console| console.lines()), vec!["always"]);
}

/// Verifies Diagnostic messages require the Diagnostic threshold.
#[test]
fn diagnostic_messages_need_diagnostic_threshold() {
    let (log, _) = logger(Verbosity::Verbose);
    log.write(Verbosity::Diagnostic, LogLevel::Error, "hidden", &[])
        .expect("write succeeds");
    assert!(log.with_console(|console| console.segments().is_empty()));
}

// ============================================================================
// Runtime Threshold Changes
// ============================================================================

/// Verifies lowering the threshold hides messages that were visible before.
#[test]
fn lowering_threshold_hides_later_messages() {
    let (log, _) = logger(Verbosity::Diagnostic);
    log.verbose("first", &[]).expect("write succeeds");
    log.set_verbosity(Verbosity::Minimal);
    log.verbose("second", &[]).expect("write succeeds");

    assert_eq!(log.with_console(|console| console.lines()), vec!["first"]);
}

/// Verifies the threshold is visible to other threads after an update.
#[test]
fn threshold_updates_are_shared_between_threads() {
    let (log, _) = logger(Verbosity::Quiet);
    let log = Arc::new(log);

    let setter = Arc::clone(&log);
    std::thread::spawn(move || setter.set_verbosity(Verbosity::Verbose))
        .join()
        .expect("setter thread completes");

    assert_eq!(log.verbosity(), Verbosity::Verbose);
    assert!(log.is_enabled(Verbosity::Normal));
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Output is produced iff the message verbosity passes the threshold,
    /// independent of level and format.
    #[test]
    fn gate_is_independent_of_level_and_format(
        threshold in verbosity(),
        message in verbosity(),
        level in level(),
        format in "([a-z {}]|[0-9][a-z {}]){0,16}",
    ) {
        let (log, sink) = logger(threshold);
        let args: [&dyn std::fmt::Display; 10] = [&0, &1, &2, &3, &4, &5, &6, &7, &8, &9];
        let result = log.write(message, level, &format, &args);

        prop_assert!(result.is_ok());
        let segments = log.with_console(|console| console.segments().len());
        if message <= threshold {
            prop_assert!(segments > 0);
            prop_assert_eq!(sink.len(), 1);
        } else {
            prop_assert_eq!(segments, 0);
            prop_assert!(sink.is_empty());
        }
    }
}
