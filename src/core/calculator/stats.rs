//! Per-day figures for the analytics view.

use crate::core::calculator::accounting::MILLIS_PER_MINUTE;
use crate::models::AttendanceRecord;
use chrono::{Days, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyStats {
    pub date: NaiveDate,
    pub work_hours: f64,
    pub break_minutes: f64,
}

impl DailyStats {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            work_hours: 0.0,
            break_minutes: 0.0,
        }
    }

    fn from_record(date: NaiveDate, r: &AttendanceRecord) -> Self {
        Self {
            date,
            work_hours: r.total_worked_minutes as f64 / 60.0,
            break_minutes: r.total_break_millis as f64 / MILLIS_PER_MINUTE as f64,
        }
    }
}

/// One entry per day for the `n` days ending at `today`, oldest first.
/// Days without a record are reported as zeros.
pub fn last_n_days(records: &[AttendanceRecord], today: NaiveDate, n: u32) -> Vec<DailyStats> {
    (0..n)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back as u64)))
        .map(|d| match records.iter().find(|r| r.date == d) {
            Some(r) => DailyStats::from_record(d, r),
            None => DailyStats::empty(d),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Averages {
    pub work_hours: f64,
    pub break_minutes: f64,
}

impl Averages {
    pub fn of(days: &[DailyStats]) -> Self {
        if days.is_empty() {
            return Self::default();
        }
        let n = days.len() as f64;
        Self {
            work_hours: days.iter().map(|d| d.work_hours).sum::<f64>() / n,
            break_minutes: days.iter().map(|d| d.break_minutes).sum::<f64>() / n,
        }
    }
}
