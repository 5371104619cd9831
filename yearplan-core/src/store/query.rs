//! Read-only queries over a store snapshot.

use super::EventStore;
use crate::date_key::DateKey;
use crate::event::Event;

impl EventStore {
    /// The stored events for a date, in insertion order. Empty if the
    /// date has none. Not sorted; display order is the caller's query.
    pub fn events_for_date(&self, key: &DateKey) -> &[Event] {
        self.events.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// How many events a date has (0 if the key is absent).
    pub fn event_count(&self, key: &DateKey) -> usize {
        self.events.get(key).map(Vec::len).unwrap_or(0)
    }

    /// The single event that summarizes a date in the calendar grid.
    ///
    /// Important events take strict priority; within the chosen tier the
    /// earliest `HH:mm` wins, with ties broken by insertion order.
    pub fn primary_event(&self, key: &DateKey) -> Option<&Event> {
        let list = self.events.get(key)?;

        let important: Vec<&Event> = list.iter().filter(|e| e.is_important).collect();
        let candidates: Vec<&Event> = if important.is_empty() {
            list.iter().collect()
        } else {
            important
        };

        // First minimum wins: strict `<` keeps the earlier-inserted
        // event on equal times.
        candidates.into_iter().fold(None, |best, e| match best {
            Some(b) if e.time < b.time => Some(e),
            Some(b) => Some(b),
            None => Some(e),
        })
    }

    /// Every event in the store, tagged with its date key, sorted by
    /// `(dateKey, time)` ascending. The management-view listing.
    pub fn all_events(&self) -> Vec<(&DateKey, &Event)> {
        let mut all: Vec<(&DateKey, &Event)> = self
            .events
            .iter()
            .flat_map(|(key, list)| list.iter().map(move |e| (key, e)))
            .collect();

        // Stable: events at the same date and time keep insertion order.
        all.sort_by(|a, b| a.0.cmp(b.0).then_with(|| a.1.time.cmp(&b.1.time)));
        all
    }
}
