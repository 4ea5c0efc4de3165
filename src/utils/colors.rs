/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Streak color:
/// two or more days → green
/// a single day → reset
/// no streak → grey
pub fn color_for_streak(len: usize) -> &'static str {
    match len {
        0 => GREY,
        1 => RESET,
        _ => GREEN,
    }
}

/// Completion-mark color: green when marked, grey for the placeholder.
pub fn color_for_mark(done: bool) -> &'static str {
    if done { GREEN } else { GREY }
}
