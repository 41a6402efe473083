pub mod break_end;
pub mod break_start;
pub mod check_in;
pub mod check_out;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod stats;
pub mod status;
pub mod today;

use crate::clock::FixedClock;
use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use chrono::{DateTime, Utc};

pub type CliLedger = Ledger<SqliteStore, FixedClock>;

/// Ledger over the configured database, frozen at `now` for this invocation.
pub fn open_ledger(cfg: &Config, now: DateTime<Utc>) -> AppResult<CliLedger> {
    let store = SqliteStore::open(&cfg.database)?;
    Ok(Ledger::with_clock(store, FixedClock::new(now))
        .with_actor(cfg.actor.clone())
        .with_offset(cfg.offset()?))
}
