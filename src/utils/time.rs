//! Time utilities: parsing instants and offsets, local clock formatting.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Parse an RFC 3339 instant (`2024-01-01T09:00:00Z`, `...+02:00`).
pub fn parse_instant(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidTime(s.to_string()))
}

/// Parse `+HH:MM`, `-HH:MM` or `Z`.
pub fn parse_offset(s: &str) -> AppResult<FixedOffset> {
    let t = s.trim();
    if t.eq_ignore_ascii_case("z") || t.eq_ignore_ascii_case("utc") {
        return Ok(utc());
    }

    let (sign, rest) = match t.chars().next() {
        Some('+') => (1, &t[1..]),
        Some('-') => (-1, &t[1..]),
        _ => return Err(AppError::InvalidOffset(s.to_string())),
    };

    let (h, m) = rest
        .split_once(':')
        .ok_or_else(|| AppError::InvalidOffset(s.to_string()))?;
    let h: i32 = h.parse().map_err(|_| AppError::InvalidOffset(s.to_string()))?;
    let m: i32 = m.parse().map_err(|_| AppError::InvalidOffset(s.to_string()))?;
    if !(0..24).contains(&h) || !(0..60).contains(&m) {
        return Err(AppError::InvalidOffset(s.to_string()));
    }

    FixedOffset::east_opt(sign * (h * 3600 + m * 60))
        .ok_or_else(|| AppError::InvalidOffset(s.to_string()))
}

pub fn utc() -> FixedOffset {
    Utc.fix()
}

/// `HH:MM:SS` of `at` in `offset`, or `--:--` when absent.
pub fn format_clock(at: Option<DateTime<Utc>>, offset: FixedOffset) -> String {
    match at {
        Some(t) => t.with_timezone(&offset).format("%H:%M:%S").to_string(),
        None => "--:--".to_string(),
    }
}
