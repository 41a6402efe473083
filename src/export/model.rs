// src/export/model.rs

use crate::core::calculator::accounting::MILLIS_PER_MINUTE;
use crate::models::AttendanceRecord;
use crate::utils::time::format_clock;
use chrono::FixedOffset;
use serde::Serialize;

/// Flat view of one attendance record for CSV / JSON.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecordExport {
    pub id: String,
    pub actor: String,
    pub date: String,
    pub check_in: String,
    pub check_out: String,
    pub breaks: usize,
    pub break_kinds: String,
    pub total_break_minutes: i64,
    pub total_worked_minutes: i64,
}

impl RecordExport {
    pub fn from_record(r: &AttendanceRecord, offset: FixedOffset) -> Self {
        Self {
            id: r.id.clone(),
            actor: r.actor.clone(),
            date: r.date_str(),
            check_in: format_clock(Some(r.checked_in_at), offset),
            check_out: format_clock(r.checked_out_at, offset),
            breaks: r.breaks.len(),
            break_kinds: r
                .breaks
                .iter()
                .map(|b| b.kind.as_str())
                .collect::<Vec<_>>()
                .join(";"),
            total_break_minutes: r.total_break_millis.div_euclid(MILLIS_PER_MINUTE),
            total_worked_minutes: r.total_worked_minutes,
        }
    }
}
