use super::open_ledger;
use crate::config::Config;
use crate::db::log::ttlog_or_warn;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::format_clock;
use chrono::{DateTime, Utc};

/// Handle the `in` command
pub fn handle(cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    let mut ledger = open_ledger(cfg, now)?;
    let record = ledger.check_in()?;

    ttlog_or_warn(
        ledger.store().conn(),
        "check_in",
        &record.date_str(),
        &format!("Checked in at {}", record.checked_in_at.to_rfc3339()),
    );

    success(format!(
        "Checked in on {} at {}.",
        record.date,
        format_clock(Some(record.checked_in_at), ledger.offset())
    ));
    Ok(())
}
