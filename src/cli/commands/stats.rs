use super::open_ledger;
use crate::config::Config;
use crate::core::calculator::stats::{Averages, last_n_days};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::format_duration;
use crate::utils::table::{Column, Table};
use chrono::{DateTime, Utc};

/// Handle the `stats` command
pub fn handle(days: Option<u32>, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    let ledger = open_ledger(cfg, now)?;
    let n = days.unwrap_or(cfg.stats_days).max(1);

    let daily = last_n_days(&ledger.history(), ledger.today(), n);
    let avg = Averages::of(&daily);

    header(format!("Last {} days", n));

    let mut table = Table::new(vec![
        Column::new("Day", 16),
        Column::new("Work", 8),
        Column::new("Breaks", 8),
    ]);
    for d in &daily {
        table.add_row(vec![
            d.date.format("%a %Y-%m-%d").to_string(),
            format!("{:.1}h", d.work_hours),
            format!("{:.0}m", d.break_minutes),
        ]);
    }
    print!("{}", table.render());

    println!();
    println!("Average daily work hours: {:.1}h", avg.work_hours);
    println!(
        "Average break duration:   {}",
        format_duration(avg.break_minutes.round() as i64)
    );
    Ok(())
}
