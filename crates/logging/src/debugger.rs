//! crates/logging/src/debugger.rs
//! Detection of an attached debugger or tracer.

/// Reports whether a debugger or tracer is attached to the current process.
///
/// On Linux this reads the `TracerPid` field of `/proc/self/status`. Other
/// platforms, and any failure to read the status file, report `false`.
#[must_use]
pub fn debugger_attached() -> bool {
    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/proc/self/status")
            .ok()
            .and_then(|status| parse_tracer_pid(&status))
            .is_some_and(|pid| pid != 0)
    }

    #[cfg(not(target_os = "linux"))]
    {
        false
    }
}

/// Extracts the `TracerPid` value from the contents of a proc status file.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_tracer_pid(status: &str) -> Option<u32> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("TracerPid:"))
        .and_then(|value| value.split_whitespace().next())
        .and_then(|raw| raw.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS: &str = "Name:\thostlog\nState:\tR (running)\nTracerPid:\t4242\nUid:\t0\t0\t0\t0\n";

    #[test]
    fn reads_tracer_pid() {
        assert_eq!(parse_tracer_pid(STATUS), Some(4242));
    }

    #[test]
    fn zero_means_untraced() {
        assert_eq!(parse_tracer_pid("TracerPid:\t0\n"), Some(0));
    }

    #[test]
    fn missing_or_malformed_field_is_none() {
        assert_eq!(parse_tracer_pid("Name:\thostlog\n"), None);
        assert_eq!(parse_tracer_pid("TracerPid:\tnobody\n"), None);
        assert_eq!(parse_tracer_pid("TracerPid:\n"), None);
    }

    #[test]
    fn detection_does_not_panic() {
        let _ = debugger_attached();
    }
}
