use anyhow::Result;
use owo_colors::OwoColorize;
use yearplan_core::{DateKey, Planner};

use crate::render::pluralize;

pub fn run(planner: &Planner, date: &str, id: &str, targets: &[String]) -> Result<()> {
    let source = DateKey::parse(date).map_err(|e| anyhow::anyhow!(e))?;
    let targets: Vec<DateKey> = targets
        .iter()
        .map(|d| DateKey::parse(d).map_err(|e| anyhow::anyhow!(e)))
        .collect::<Result<_>>()?;

    if planner.copy_event_to_dates(&source, id, &targets) {
        println!(
            "{}",
            format!("  Copied event to {} {}", targets.len(), pluralize("date", targets.len()))
                .green()
        );
        Ok(())
    } else {
        anyhow::bail!(
            "Nothing copied: no event '{}' on {}, or no targets besides the source date",
            id,
            source
        )
    }
}
