use anyhow::Result;
use owo_colors::OwoColorize;
use yearplan_core::{DateKey, Planner};

use crate::render::pluralize;

pub fn run(planner: &Planner, date: &str, ids: &[String]) -> Result<()> {
    let key = DateKey::parse(date).map_err(|e| anyhow::anyhow!(e))?;

    let removed = match ids {
        [id] => planner.delete_event(&key, id),
        _ => {
            let items: Vec<(DateKey, String)> =
                ids.iter().map(|id| (key.clone(), id.clone())).collect();
            planner.batch_delete(&items)
        }
    };

    if removed {
        println!(
            "{}",
            format!("  Removed {} {} from {}", ids.len(), pluralize("event", ids.len()), key)
                .green()
        );
        Ok(())
    } else {
        anyhow::bail!("No matching events on {}", key)
    }
}
