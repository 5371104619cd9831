use anyhow::Result;
use chrono::{Datelike, Local};
use owo_colors::OwoColorize;
use yearplan_core::Planner;

use crate::render::pluralize;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Twelve per-month summaries: event totals and the busiest day.
pub fn run(planner: &Planner, year: Option<i32>) -> Result<()> {
    let year = year.unwrap_or_else(|| Local::now().year());
    let snapshot = planner.snapshot();

    println!("{}", year.to_string().bold());

    let mut year_total = 0;
    for month in 1..=12u32 {
        let prefix = format!("{:04}-{:02}-", year, month);

        let mut total = 0;
        let mut busiest: Option<(&yearplan_core::DateKey, usize)> = None;
        for key in snapshot.date_keys() {
            if !key.as_str().starts_with(&prefix) {
                continue;
            }
            let count = snapshot.event_count(key);
            total += count;
            if busiest.map(|(_, c)| count > c).unwrap_or(true) {
                busiest = Some((key, count));
            }
        }
        year_total += total;

        let name = format!("{:<10}", MONTH_NAMES[(month - 1) as usize]);
        if total == 0 {
            println!("  {} {}", name, "-".dimmed());
        } else {
            let detail = match busiest {
                Some((key, count)) if count > 1 => {
                    format!(" (busiest: {}, {})", key, count).dimmed().to_string()
                }
                _ => String::new(),
            };
            println!(
                "  {} {} {}{}",
                name,
                total,
                pluralize("event", total),
                detail
            );
        }
    }

    println!(
        "{}",
        format!("  {} {} in {}", year_total, pluralize("event", year_total), year).dimmed()
    );

    Ok(())
}
