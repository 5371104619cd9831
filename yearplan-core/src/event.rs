//! Event records and partial updates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default intra-day time for events created without one.
pub const DEFAULT_TIME: &str = "00:00";

/// A single planned item on a calendar date.
///
/// The date itself is not stored here; it is the key the event lives
/// under in the store. Moving an event to another date is a
/// delete-then-recreate, never an in-place edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique id, assigned at creation, immutable.
    pub id: String,
    /// Display title, non-empty after trimming.
    pub title: String,
    /// `HH:mm` 24-hour string, used only for intra-day ordering.
    pub time: String,
    /// Importance affects primary-event selection, not ordering.
    pub is_important: bool,
    /// Optional color tag, carried opaquely by the store.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<String>,
}

impl Event {
    /// Build a new event with a fresh id.
    ///
    /// Returns `None` if the title trims to empty. The time defaults to
    /// [`DEFAULT_TIME`] when empty or absent.
    pub fn new(
        title: &str,
        time: Option<&str>,
        is_important: bool,
        color: Option<&str>,
    ) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let time = match time {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => DEFAULT_TIME.to_string(),
        };

        Some(Event {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            time,
            is_important,
            color: color.filter(|c| !c.is_empty()).map(String::from),
        })
    }

    /// A copy of this event under a fresh id (same title, time,
    /// importance and color). The original is untouched.
    pub fn duplicate(&self) -> Self {
        Event {
            id: Uuid::new_v4().to_string(),
            ..self.clone()
        }
    }

    /// Merge a partial update over this event. Omitted fields are left
    /// untouched; `id` is never patched.
    pub fn apply(&self, patch: &EventPatch) -> Self {
        Event {
            id: self.id.clone(),
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            time: patch.time.clone().unwrap_or_else(|| self.time.clone()),
            is_important: patch.is_important.unwrap_or(self.is_important),
            color: match &patch.color {
                Some(c) => c.clone(),
                None => self.color.clone(),
            },
        }
    }
}

/// A partial update to an event: one optional slot per mutable field.
///
/// `color` is doubly optional so that "leave the color alone" (outer
/// `None`) and "clear the color" (`Some(None)`) stay distinct.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub time: Option<String>,
    pub is_important: Option<bool>,
    pub color: Option<Option<String>>,
}

impl EventPatch {
    /// True if the patch touches nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.time.is_none()
            && self.is_important.is_none()
            && self.color.is_none()
    }
}
