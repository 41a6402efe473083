use super::break_kind::BreakKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One pause inside a work session. `ended_at == None` means still running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakInterval {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: BreakKind,
    #[serde(rename = "startTime")]
    pub started_at: DateTime<Utc>,
    #[serde(rename = "endTime", default)]
    pub ended_at: Option<DateTime<Utc>>,
}

impl BreakInterval {
    /// Open a new break at `at`.
    pub fn open(kind: BreakKind, at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            started_at: at,
            ended_at: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Length of a closed break; an open one counts as 0.
    pub fn duration_millis(&self) -> i64 {
        match self.ended_at {
            Some(end) => (end - self.started_at).num_milliseconds(),
            None => 0,
        }
    }
}
