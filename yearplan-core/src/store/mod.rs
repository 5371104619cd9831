//! The event store: a date-keyed mapping of planned events.
//!
//! `EventStore` is an immutable snapshot. Queries borrow from it;
//! mutations return a fresh snapshot (or `None` when the request is a
//! no-op) and never touch the snapshot they were called on.

mod mutate;
mod query;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::date_key::DateKey;
use crate::error::{PlannerError, PlannerResult};
use crate::event::Event;

/// One immutable snapshot of all events, keyed by calendar date.
///
/// Invariants:
/// - no key maps to an empty sequence ("has events" is a key-presence
///   test); removing a date's last event removes the key
/// - within a date, events keep insertion order; display order is a
///   query concern
/// - event ids are unique across the whole store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventStore {
    events: BTreeMap<DateKey, Vec<Event>>,
}

impl EventStore {
    pub fn new() -> Self {
        EventStore::default()
    }

    /// Number of dates that have at least one event.
    pub fn date_count(&self) -> usize {
        self.events.len()
    }

    /// Total number of events across all dates.
    pub fn total_events(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The dates that have events, in chronological order.
    pub fn date_keys(&self) -> impl Iterator<Item = &DateKey> {
        self.events.keys()
    }

    /// Serialize to the persisted layout: a JSON object mapping date-key
    /// strings to arrays of event records.
    pub fn to_json(&self) -> PlannerResult<String> {
        serde_json::to_string(self).map_err(|e| PlannerError::Serialization(e.to_string()))
    }

    /// Parse a persisted store. Empty sequences are dropped on the way
    /// in so the no-empty-key invariant holds even for hand-edited data.
    pub fn from_json(data: &str) -> PlannerResult<Self> {
        let mut store: EventStore =
            serde_json::from_str(data).map_err(|e| PlannerError::Serialization(e.to_string()))?;
        store.events.retain(|_, list| !list.is_empty());
        Ok(store)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Add an event and panic on a no-op. Test shorthand for valid adds.
    pub fn must_add(
        store: &EventStore,
        key: &str,
        title: &str,
        time: &str,
        important: bool,
    ) -> EventStore {
        let key = DateKey::parse(key).unwrap();
        store
            .add_event(&key, title, Some(time), important, None)
            .expect("add should apply")
    }

    pub fn key(s: &str) -> DateKey {
        DateKey::parse(s).unwrap()
    }
}
