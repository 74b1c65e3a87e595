/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Remaining capacity color:
/// \>0 → yellow (hours still unaccounted)
/// \<0 → red (over capacity)
/// 0 → green
pub fn color_for_remaining(value: i64) -> &'static str {
    if value > 0 {
        YELLOW
    } else if value < 0 {
        RED
    } else {
        GREEN
    }
}
