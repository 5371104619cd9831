use anyhow::Result;
use owo_colors::OwoColorize;
use yearplan_core::Planner;

use crate::render::{pluralize, Render};

use super::date_or_today;

pub fn run(planner: &Planner, date: Option<&str>) -> Result<()> {
    let key = date_or_today(date)?;
    let snapshot = planner.snapshot();
    let events = snapshot.events_for_date(&key);

    println!("{}", key.to_string().bold());

    if events.is_empty() {
        println!("{}", "  No events".dimmed());
        return Ok(());
    }

    for event in events {
        println!("  {}  {}", event.render(), event.id.dimmed());
    }
    println!("{}", format!("  {} {}", events.len(), pluralize("event", events.len())).dimmed());

    Ok(())
}
