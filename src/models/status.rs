use super::record::AttendanceRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the actor currently is in the working day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    #[default]
    CheckedOut,
    CheckedIn,
    OnBreak,
}

impl AttendanceStatus {
    /// Stored tag, same as the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::CheckedOut => "checked-out",
            AttendanceStatus::CheckedIn => "checked-in",
            AttendanceStatus::OnBreak => "on-break",
        }
    }

    /// Recompute the status from today's record.
    pub fn derive(today: Option<&AttendanceRecord>) -> Self {
        match today {
            None => AttendanceStatus::CheckedOut,
            Some(r) if r.is_checked_out() => AttendanceStatus::CheckedOut,
            Some(r) if r.open_break().is_some() => AttendanceStatus::OnBreak,
            Some(_) => AttendanceStatus::CheckedIn,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::CheckedOut => "Checked out",
            AttendanceStatus::CheckedIn => "Checked in",
            AttendanceStatus::OnBreak => "On break",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
