//! Work/break time accounting. Pure functions, no clock and no I/O.

use crate::models::{AttendanceRecord, BreakInterval};
use chrono::{DateTime, Utc};

pub const MILLIS_PER_MINUTE: i64 = 60_000;

/// Sum of closed breaks in milliseconds. Open breaks contribute 0.
pub fn total_break_millis(breaks: &[BreakInterval]) -> i64 {
    breaks.iter().map(BreakInterval::duration_millis).sum()
}

/// Minutes worked between check-in and check-out, minus closed breaks.
/// Partial minutes are dropped (floor, not rounding).
pub fn worked_minutes(
    checked_in_at: DateTime<Utc>,
    checked_out_at: DateTime<Utc>,
    breaks: &[BreakInterval],
) -> i64 {
    let session = (checked_out_at - checked_in_at).num_milliseconds();
    (session - total_break_millis(breaks)).div_euclid(MILLIS_PER_MINUTE)
}

/// Worked minutes so far: up to check-out if present, otherwise up to `now`.
pub fn elapsed_worked_minutes(record: &AttendanceRecord, now: DateTime<Utc>) -> i64 {
    let end = record.checked_out_at.unwrap_or(now);
    worked_minutes(record.checked_in_at, end, &record.breaks).max(0)
}

/// Break time so far in whole minutes, counting a running break up to `now`.
pub fn elapsed_break_minutes(record: &AttendanceRecord, now: DateTime<Utc>) -> i64 {
    let running = record
        .open_break()
        .map(|b| (now - b.started_at).num_milliseconds().max(0))
        .unwrap_or(0);
    (total_break_millis(&record.breaks) + running).div_euclid(MILLIS_PER_MINUTE)
}
