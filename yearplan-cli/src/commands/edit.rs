use anyhow::Result;
use owo_colors::OwoColorize;
use yearplan_core::{DateKey, EventPatch, Planner};

use crate::render::validate_color;

use super::parse_time;

/// Raw edit flags from the command line.
pub struct Changes {
    pub title: Option<String>,
    pub time: Option<String>,
    pub important: bool,
    pub not_important: bool,
    pub color: Option<String>,
    pub clear_color: bool,
}

pub fn run(planner: &Planner, date: &str, id: &str, changes: Changes) -> Result<()> {
    let key = DateKey::parse(date).map_err(|e| anyhow::anyhow!(e))?;
    let patch = build_patch(changes)?;

    if patch.is_empty() {
        anyhow::bail!("Nothing to change. Pass at least one of --title, --time, --important, --not-important, --color, --clear-color");
    }

    if planner.update_event(&key, id, &patch) {
        println!("{}", format!("  Updated event on {}", key).green());
        Ok(())
    } else {
        anyhow::bail!("No event with id '{}' on {}", id, key)
    }
}

fn build_patch(changes: Changes) -> Result<EventPatch> {
    if let Some(title) = &changes.title {
        anyhow::ensure!(!title.trim().is_empty(), "Title cannot be empty");
    }
    if let Some(color) = &changes.color {
        validate_color(color)?;
    }

    Ok(EventPatch {
        title: changes.title.map(|t| t.trim().to_string()),
        time: changes.time.as_deref().map(parse_time).transpose()?,
        is_important: match (changes.important, changes.not_important) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        },
        color: if changes.clear_color {
            Some(None)
        } else {
            changes.color.map(Some)
        },
    })
}
