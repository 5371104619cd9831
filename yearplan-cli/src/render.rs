//! Terminal rendering for yearplan types.
//!
//! Extension-trait rendering with owo_colors, plus the closed color
//! palette events may be tagged with. The store carries color tags
//! opaquely; this module is where membership is enforced.

use owo_colors::OwoColorize;
use yearplan_core::Event;

/// The color tags the UI accepts.
pub const EVENT_COLORS: [&str; 5] = ["blue", "green", "orange", "red", "purple"];

/// Check a user-supplied color tag against the palette.
pub fn validate_color(color: &str) -> anyhow::Result<()> {
    if EVENT_COLORS.contains(&color) {
        Ok(())
    } else {
        anyhow::bail!(
            "Unknown color '{}'. Choose one of: {}",
            color,
            EVENT_COLORS.join(", ")
        )
    }
}

/// Tint text with an event's color tag. Unknown or absent tags pass
/// the text through unstyled.
pub fn paint(color: Option<&str>, text: &str) -> String {
    match color {
        Some("blue") => text.blue().to_string(),
        Some("green") => text.green().to_string(),
        Some("orange") => text.yellow().to_string(),
        Some("red") => text.red().to_string(),
        Some("purple") => text.magenta().to_string(),
        _ => text.to_string(),
    }
}

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let title = paint(self.color.as_deref(), &self.title);
        let star = if self.is_important {
            format!(" {}", "★".yellow())
        } else {
            String::new()
        };
        format!("{} {}{}", self.time.dimmed(), title, star)
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> &str {
    if count == 1 {
        word
    } else {
        match word {
            "event" => "events",
            "date" => "dates",
            _ => word,
        }
    }
}
