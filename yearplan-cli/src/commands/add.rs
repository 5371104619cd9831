use anyhow::Result;
use owo_colors::OwoColorize;
use yearplan_core::{DateKey, Planner};

use crate::render::{pluralize, validate_color};

use super::{date_or_today, month_keys, parse_month, parse_time};

#[allow(clippy::too_many_arguments)]
pub fn run(
    planner: &Planner,
    title: &str,
    date: Option<&str>,
    time: Option<&str>,
    important: bool,
    color: Option<&str>,
    dates: &[String],
    month: Option<&str>,
) -> Result<()> {
    if let Some(c) = color {
        validate_color(c)?;
    }
    let time = time.map(parse_time).transpose()?;

    // Bulk targets: an explicit date list, or a whole month expanded here.
    // The store only ever sees explicit key lists.
    let targets: Vec<DateKey> = if let Some(m) = month {
        let (year, month) = parse_month(Some(m))?;
        month_keys(year, month)
    } else {
        dates
            .iter()
            .map(|d| DateKey::parse(d).map_err(|e| anyhow::anyhow!(e)))
            .collect::<Result<_>>()?
    };

    if targets.is_empty() {
        let key = date_or_today(date)?;
        if planner.add_event(&key, title, time.as_deref(), important, color) {
            println!("{}", format!("  Added: {} on {}", title.trim(), key).green());
        } else {
            anyhow::bail!("Nothing added: title is empty");
        }
    } else if planner.add_event_to_dates(&targets, title, time.as_deref(), important, color) {
        println!(
            "{}",
            format!(
                "  Added: {} on {} {}",
                title.trim(),
                targets.len(),
                pluralize("date", targets.len())
            )
            .green()
        );
    } else {
        anyhow::bail!("Nothing added: title is empty");
    }

    Ok(())
}
