use super::break_interval::BreakInterval;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One day of attendance for one actor.
///
/// Field names on the wire are kept compatible with previously stored data
/// (`userId`, `checkIn`, `totalWorkTime`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    #[serde(rename = "userId")]
    pub actor: String,
    pub date: NaiveDate, // "YYYY-MM-DD", day key in the reference offset
    #[serde(rename = "checkIn")]
    pub checked_in_at: DateTime<Utc>,
    #[serde(rename = "checkOut", default)]
    pub checked_out_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub breaks: Vec<BreakInterval>,
    /// Only meaningful once checked out.
    #[serde(rename = "totalWorkTime", default)]
    pub total_worked_minutes: i64,
    #[serde(rename = "totalBreakTime", default)]
    pub total_break_millis: i64,
}

impl AttendanceRecord {
    /// Fresh record for `date`, checked in at `at`.
    pub fn check_in(actor: &str, date: NaiveDate, at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            actor: actor.to_string(),
            date,
            checked_in_at: at,
            checked_out_at: None,
            breaks: Vec::new(),
            total_worked_minutes: 0,
            total_break_millis: 0,
        }
    }

    pub fn is_checked_out(&self) -> bool {
        self.checked_out_at.is_some()
    }

    /// The break still running, if any (most recently started first).
    pub fn open_break(&self) -> Option<&BreakInterval> {
        self.breaks.iter().rev().find(|b| b.is_open())
    }

    pub fn open_break_mut(&mut self) -> Option<&mut BreakInterval> {
        self.breaks.iter_mut().rev().find(|b| b.is_open())
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
