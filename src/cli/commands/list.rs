use super::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::AttendanceRecord;
use crate::utils::colors::{colorize_in_out, colorize_optional};
use crate::utils::date::period_bounds;
use crate::utils::format_duration;
use crate::utils::formatting::separator;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_clock;
use chrono::{DateTime, FixedOffset, Utc};

pub fn handle(cmd: &Commands, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let ledger = open_ledger(cfg, now)?;

        let bounds = match period {
            Some(p) => Some(period_bounds(p).map_err(AppError::InvalidDate)?),
            None => None,
        };

        let records: Vec<AttendanceRecord> = ledger
            .history()
            .into_iter()
            .filter(|r| match bounds {
                Some((from, to)) => r.date >= from && r.date <= to,
                None => true,
            })
            .collect();

        if records.is_empty() {
            println!("No attendance records found.");
            return Ok(());
        }

        println!("📅 Attendance log ({} records):", records.len());
        print_table(&records, ledger.offset(), &cfg.separator_char);
    }
    Ok(())
}

fn work_cell(r: &AttendanceRecord) -> String {
    if r.is_checked_out() {
        format_duration(r.total_worked_minutes)
    } else {
        "--".to_string()
    }
}

fn print_table(records: &[AttendanceRecord], offset: FixedOffset, sep: &str) {
    let mut table = Table::new(vec![
        Column::new("Date", 12),
        Column::new("Check In", 10),
        Column::new("Check Out", 10),
        Column::new("Breaks", 24),
        Column::new("Work Duration", 13),
    ]);

    for r in records {
        let breaks = r
            .breaks
            .iter()
            .map(|b| b.kind.as_str())
            .collect::<Vec<_>>()
            .join(",");

        table.add_row(vec![
            r.date_str(),
            colorize_in_out(&format_clock(Some(r.checked_in_at), offset), true),
            colorize_in_out(&format_clock(r.checked_out_at, offset), false),
            colorize_optional(if breaks.is_empty() { "--" } else { &breaks }),
            colorize_optional(&work_cell(r)),
        ]);
    }

    let rendered = table.render();
    let width = rendered.lines().next().map(|l| l.len()).unwrap_or(0);
    println!("{}", separator(sep, width));
    print!("{}", rendered);
    println!("{}", separator(sep, width));
}
