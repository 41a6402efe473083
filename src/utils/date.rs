use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};

/// Calendar day of `at` in the reference `offset`.
pub fn day_of(at: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    at.with_timezone(&offset).date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Inclusive date bounds described by a period string:
/// `YYYY-MM-DD`, `YYYY-MM`, `YYYY`, or `start:end` with any of those.
pub fn period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    if let Some((start, end)) = p.split_once(':') {
        let (s, _) = single_period_bounds(start)?;
        let (_, e) = single_period_bounds(end)?;
        if e < s {
            return Err(format!("Invalid range (end before start): {}", p));
        }
        return Ok((s, e));
    }
    single_period_bounds(p)
}

fn single_period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Some(first) = parse_date(&format!("{}-01", p)) {
        return last_day_of_month(first.year(), first.month())
            .map(|last| (first, last))
            .ok_or_else(|| format!("Invalid period: {}", p));
    }

    // YYYY
    if let Ok(year) = p.parse::<i32>() {
        let first = NaiveDate::from_ymd_opt(year, 1, 1);
        let last = NaiveDate::from_ymd_opt(year, 12, 31);
        if let (Some(f), Some(l)) = (first, last) {
            return Ok((f, l));
        }
    }

    Err(format!("Invalid period: {}", p))
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (y, m) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}
