use super::open_ledger;
use crate::config::Config;
use crate::db::log::ttlog_or_warn;
use crate::errors::AppResult;
use crate::models::BreakKind;
use crate::ui::messages::success;
use crate::utils::time::format_clock;
use chrono::{DateTime, Utc};

/// Handle the `break` command
pub fn handle(kind: BreakKind, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    let mut ledger = open_ledger(cfg, now)?;
    let record = ledger.start_break(kind)?;

    ttlog_or_warn(
        ledger.store().conn(),
        "break_start",
        &record.date_str(),
        &format!("{} started", kind.label()),
    );

    success(format!(
        "☕ {} started at {}.",
        kind.label(),
        format_clock(Some(now), ledger.offset())
    ));
    Ok(())
}
