#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Utc};
use rattendance::clock::{Clock, FixedClock};
use rattendance::core::Ledger;
use rattendance::models::AttendanceStatus;
use rattendance::store::{MemoryStore, STATUS_KEY, Store};
use std::env;
use std::fs;
use std::path::PathBuf;

/// CLI command isolated from the user's configuration directory.
pub fn rti(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rattendance");
    cmd.env("RATTENDANCE_CONFIG_DIR", config_dir(name));
    cmd
}

fn config_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance_conf", name));
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    fs::remove_dir_all(config_dir(name)).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn at(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid RFC 3339 instant")
}

/// In-memory ledger with its clock frozen at `start`.
pub fn ledger_at(start: &str) -> Ledger<MemoryStore, FixedClock> {
    Ledger::with_clock(MemoryStore::new(), FixedClock::new(at(start)))
}

/// Same ledger and instant, with the cached status overwritten.
pub fn with_cached_status(
    ledger: Ledger<MemoryStore, FixedClock>,
    status: AttendanceStatus,
) -> Ledger<MemoryStore, FixedClock> {
    let now = ledger.clock().now();
    let mut store = ledger.into_store();
    store.save(STATUS_KEY, &status).unwrap();
    Ledger::with_clock(store, FixedClock::new(now))
}

/// Run one CLI command against `db` at instant `when`.
pub fn run_at(name: &str, db: &str, when: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    rti(name)
        .args(["--db", db, "--at", when])
        .args(args)
        .assert()
}
