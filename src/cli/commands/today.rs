use super::open_ledger;
use crate::config::Config;
use crate::core::calculator::accounting::{elapsed_break_minutes, elapsed_worked_minutes};
use crate::errors::AppResult;
use crate::ui::messages::{header, info, status_line};
use crate::utils::colors::{RESET, color_for_break, colorize_in_out, colorize_optional};
use crate::utils::format_duration;
use crate::utils::formatting::pad_right;
use crate::utils::time::format_clock;
use chrono::{DateTime, Utc};

/// Handle the `today` command
pub fn handle(cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    let ledger = open_ledger(cfg, now)?;
    let today = ledger.today();
    let offset = ledger.offset();

    header(format!("Today {}", today));
    status_line(ledger.status());

    let Some(record) = ledger.today_record() else {
        info(format!("No attendance record for {}.", today));
        return Ok(());
    };

    let row = |label: &str, value: String| println!("{} {}", pad_right(label, 16), value);

    row(
        "Check-in:",
        colorize_in_out(&format_clock(Some(record.checked_in_at), offset), true),
    );
    row(
        "Check-out:",
        colorize_in_out(&format_clock(record.checked_out_at, offset), false),
    );
    row(
        "Work duration:",
        colorize_optional(&format_duration(elapsed_worked_minutes(&record, now))),
    );
    row(
        "Break duration:",
        colorize_optional(&format_duration(elapsed_break_minutes(&record, now))),
    );

    if !record.breaks.is_empty() {
        println!("Breaks:");
        for b in &record.breaks {
            let minutes = match b.ended_at {
                Some(_) => format!("{} min", b.duration_millis() / 60_000),
                None => "running".to_string(),
            };
            println!(
                "  - {}{:<6}{} {} → {} ({})",
                color_for_break(b.kind),
                b.kind.as_str(),
                RESET,
                format_clock(Some(b.started_at), offset),
                format_clock(b.ended_at, offset),
                minutes
            );
        }
    }

    Ok(())
}
