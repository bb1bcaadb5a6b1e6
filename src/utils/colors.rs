//! ANSI color helper utilities for terminal output.

use crate::models::status::Status;
use crate::models::urgency::Urgency;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Badge color for a raw status value; unknown statuses render grey.
pub fn color_for_status(raw: &str) -> &'static str {
    Status::from_code(raw).map(|s| s.color()).unwrap_or(GREY)
}

/// Badge color for a raw urgency value; unknown urgencies render grey.
pub fn color_for_urgency(raw: &str) -> &'static str {
    Urgency::from_code(raw).map(|u| u.color()).unwrap_or(GREY)
}

/// Grey out placeholder/empty values, keep real values untouched.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}
