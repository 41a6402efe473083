use super::open_ledger;
use crate::config::Config;
use crate::db::log::ttlog_or_warn;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::format_duration;
use crate::utils::time::format_clock;
use chrono::{DateTime, Utc};

/// Handle the `out` command
pub fn handle(cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    let mut ledger = open_ledger(cfg, now)?;
    let record = ledger.check_out()?;

    ttlog_or_warn(
        ledger.store().conn(),
        "check_out",
        &record.date_str(),
        &format!(
            "Checked out, worked {} min, breaks {} ms",
            record.total_worked_minutes, record.total_break_millis
        ),
    );

    success(format!(
        "Checked out at {}. Worked {} (breaks {}).",
        format_clock(record.checked_out_at, ledger.offset()),
        format_duration(record.total_worked_minutes),
        format_duration(record.total_break_millis / 60_000)
    ));
    Ok(())
}
