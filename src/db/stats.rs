use crate::db::migrate::applied_versions;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::models::AttendanceRecord;
use crate::store::{RECORDS_KEY, Store};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(store: &SqliteStore, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);

    //
    // 2) RECORDS
    //
    let records: Vec<AttendanceRecord> = store.load(RECORDS_KEY, Vec::new());
    println!(
        "{}• Attendance records:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        records.len(),
        RESET
    );

    //
    // 3) DATE RANGE
    //
    let first = records.iter().map(|r| r.date).min();
    let last = records.iter().map(|r| r.date).max();
    let fmt = |d: Option<chrono::NaiveDate>| {
        d.map(|d| d.to_string())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));

    //
    // 4) SCHEMA
    //
    let versions = applied_versions(store.conn())?;
    println!(
        "{}• Migrations applied:{} {}",
        CYAN,
        RESET,
        versions.len()
    );
    if let Some(v) = versions.last() {
        println!("    latest: {}", v);
    }

    println!();
    Ok(())
}
