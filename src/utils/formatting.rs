//! Formatting utilities for session outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Marker shown in the list table: "✓" for a completed day, "·" otherwise.
pub fn completion_mark(done: bool) -> &'static str {
    if done { "✓" } else { "·" }
}
