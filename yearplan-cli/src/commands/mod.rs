pub mod add;
pub mod config;
pub mod copy;
pub mod day;
pub mod edit;
pub mod list;
pub mod month;
pub mod rm;
pub mod year;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate, NaiveTime};
use yearplan_core::DateKey;

/// Parse a date argument, defaulting to today.
pub fn date_or_today(date: Option<&str>) -> Result<DateKey> {
    match date {
        Some(s) => DateKey::parse(s).map_err(|e| anyhow::anyhow!(e)),
        None => Ok(DateKey::today()),
    }
}

/// Parse and canonicalize a time argument (zero-padded `HH:MM`).
pub fn parse_time(time: &str) -> Result<String> {
    let parsed = NaiveTime::parse_from_str(time, "%H:%M")
        .with_context(|| format!("Invalid time '{}'. Expected HH:MM", time))?;
    Ok(parsed.format("%H:%M").to_string())
}

/// Parse a `YYYY-MM` argument, defaulting to the current month.
pub fn parse_month(month: Option<&str>) -> Result<(i32, u32)> {
    match month {
        Some(s) => {
            let (y, m) = s
                .split_once('-')
                .with_context(|| format!("Invalid month '{}'. Expected YYYY-MM", s))?;
            let year: i32 = y.parse().with_context(|| format!("Invalid year '{}'", y))?;
            let month: u32 = m.parse().with_context(|| format!("Invalid month '{}'", m))?;
            anyhow::ensure!((1..=12).contains(&month), "Month must be 1-12, got {}", month);
            Ok((year, month))
        }
        None => {
            let now = Local::now().date_naive();
            Ok((now.year(), now.month()))
        }
    }
}

/// Every date key of a month, in order.
pub fn month_keys(year: i32, month: u32) -> Vec<DateKey> {
    (1..=31)
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .map(DateKey::from_date)
        .collect()
}
