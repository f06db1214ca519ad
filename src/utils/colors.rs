/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Over-threshold breaks are red, the others green.
pub fn color_for_break(over_threshold: bool) -> &'static str {
    if over_threshold { RED } else { GREEN }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
