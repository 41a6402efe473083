use super::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::log::ttlog_or_warn;
use crate::errors::AppResult;
use chrono::{DateTime, Utc};

pub fn handle(cmd: &Commands, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let ledger = open_ledger(cfg, now)?;
        let rows = ExportLogic::export(
            &ledger.history(),
            ledger.offset(),
            *format,
            file,
            range,
            *force,
        )?;

        ttlog_or_warn(
            ledger.store().conn(),
            "export",
            file,
            &format!("Exported {} records as {}", rows, format.as_str()),
        );
    }
    Ok(())
}
