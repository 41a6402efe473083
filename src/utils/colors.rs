/// ANSI color helper utilities for terminal output.
use crate::models::{AttendanceStatus, BreakKind};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// checked-in → green, on-break → yellow, checked-out → grey
pub fn color_for_status(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::CheckedIn => GREEN,
        AttendanceStatus::OnBreak => YELLOW,
        AttendanceStatus::CheckedOut => GREY,
    }
}

pub fn color_for_break(kind: BreakKind) -> &'static str {
    match kind {
        BreakKind::Lunch => MAGENTA,
        BreakKind::Coffee => YELLOW,
        BreakKind::Other => CYAN,
    }
}

/// Grey out placeholders (`--:--`, `0h 0m`, `--`), pass anything else through.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" || v == "0h 0m" || v == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" {
        return format!("{GREY}{value}{RESET}");
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}
