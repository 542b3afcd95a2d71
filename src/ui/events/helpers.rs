//! Event handler helpers

use std::fs::OpenOptions;
use std::io::Write;

/// Append a debug line to the log file.
/// The terminal runs in raw mode, so stderr is not usable for tracing.
pub fn log_debug(msg: &str) {
    let _ = OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/request-console-tui.log")
        .and_then(|mut f| writeln!(f, "{}", msg));
}
