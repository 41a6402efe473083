use super::open_ledger;
use crate::config::Config;
use crate::db::log::ttlog_or_warn;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::format_duration;
use chrono::{DateTime, Utc};

/// Handle the `resume` command
pub fn handle(cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    let mut ledger = open_ledger(cfg, now)?;
    let record = ledger.end_break()?;

    let last = record.breaks.last().map(|b| b.duration_millis()).unwrap_or(0);

    ttlog_or_warn(
        ledger.store().conn(),
        "break_end",
        &record.date_str(),
        &format!("Break ended after {} ms", last),
    );

    success(format!(
        "Back to work. Break lasted {}, total breaks today {}.",
        format_duration(last / 60_000),
        format_duration(record.total_break_millis / 60_000)
    ));
    Ok(())
}
