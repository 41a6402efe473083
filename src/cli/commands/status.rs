use super::open_ledger;
use crate::config::Config;
use crate::db::log::ttlog_or_warn;
use crate::errors::AppResult;
use crate::ui::messages::{info, status_line};
use chrono::{DateTime, Utc};

/// Handle the `status` command
pub fn handle(sync: bool, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    let mut ledger = open_ledger(cfg, now)?;

    if sync {
        let before = ledger.status();
        let after = ledger.sync_status()?;
        if before != after {
            ttlog_or_warn(
                ledger.store().conn(),
                "sync_status",
                after.as_str(),
                &format!("Status resynced from {} to {}", before, after),
            );
            info(format!("Status resynced: {} → {}", before, after));
        }
    }

    status_line(ledger.status());
    Ok(())
}
