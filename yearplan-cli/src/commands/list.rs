use anyhow::Result;
use owo_colors::OwoColorize;
use yearplan_core::Planner;

use crate::render::{pluralize, Render};

/// The management view: every event, sorted by date then time, with
/// the ids that `edit`, `rm` and `copy` take.
pub fn run(planner: &Planner) -> Result<()> {
    let snapshot = planner.snapshot();
    let all = snapshot.all_events();

    if all.is_empty() {
        println!("{}", "No events. Add one with: yearplan add <title>".dimmed());
        return Ok(());
    }

    let mut current_key = None;
    for (key, event) in &all {
        if current_key != Some(*key) {
            println!("{}", key.to_string().bold());
            current_key = Some(*key);
        }
        println!("  {}  {}", event.render(), event.id.dimmed());
    }

    println!(
        "{}",
        format!(
            "  {} {} on {} {}",
            all.len(),
            pluralize("event", all.len()),
            snapshot.date_count(),
            pluralize("date", snapshot.date_count())
        )
        .dimmed()
    );

    Ok(())
}
