/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Wraps `value` in `color` unless it is the undefined placeholder,
/// which is always greyed out.
pub fn paint(value: &str, color: &str) -> String {
    if value.trim() == crate::utils::formatting::UNDEFINED {
        format!("{GREY}{value}{RESET}")
    } else {
        format!("{color}{value}{RESET}")
    }
}

/// Impact color:
/// \>0 → green (late surge)
/// \<0 → red (early points only)
/// 0 → reset
pub fn color_for_impact(value: f64) -> &'static str {
    if value > 0.0 {
        GREEN
    } else if value < 0.0 {
        RED
    } else {
        RESET
    }
}

/// Grey for undefined values, reset otherwise.
pub fn color_for_optional(value: Option<f64>) -> &'static str {
    match value {
        Some(_) => RESET,
        None => GREY,
    }
}
