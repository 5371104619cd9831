use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;
use yearplan_core::{DateKey, Planner};

use crate::render::paint;

use super::parse_month;

const WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// One row per day: day number, weekday, primary event, event count.
pub fn run(planner: &Planner, month: Option<&str>) -> Result<()> {
    let (year, month) = parse_month(month)?;
    let snapshot = planner.snapshot();
    let today = DateKey::today();

    println!("{}", format!("{:04}-{:02}", year, month).bold());

    for day in 1..=31 {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            break;
        };
        let key = DateKey::from_date(date);
        let weekday = WEEKDAYS[date.weekday().num_days_from_monday() as usize];

        let count = snapshot.event_count(&key);
        let summary = match snapshot.primary_event(&key) {
            Some(event) => {
                let title = paint(event.color.as_deref(), &event.title);
                if event.is_important {
                    format!("{} {}", title, "★".yellow())
                } else {
                    title
                }
            }
            None => String::new(),
        };
        let badge = if count > 0 {
            format!(" ({})", count).dimmed().to_string()
        } else {
            String::new()
        };

        let label = format!("{:>3} {}", day, weekday);
        if key == today {
            println!("{}  {}{}", label.bold().blue(), summary, badge);
        } else if matches!(date.weekday(), chrono::Weekday::Sat | chrono::Weekday::Sun) {
            println!("{}  {}{}", label.dimmed(), summary, badge);
        } else {
            println!("{}  {}{}", label, summary, badge);
        }
    }

    Ok(())
}
