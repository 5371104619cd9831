//! Snapshot-producing mutations.
//!
//! Every mutation leaves `self` untouched and returns the next snapshot,
//! or `None` when the request is a no-op (validation failure or
//! not-found). There is no partial success: `Some` means the whole
//! request applied.

use std::collections::BTreeMap;
use std::collections::HashSet;

use super::EventStore;
use crate::date_key::DateKey;
use crate::event::{Event, EventPatch};

impl EventStore {
    /// Add one event to a date. No-op if the title trims to empty.
    pub fn add_event(
        &self,
        key: &DateKey,
        title: &str,
        time: Option<&str>,
        is_important: bool,
        color: Option<&str>,
    ) -> Option<EventStore> {
        let event = Event::new(title, time, is_important, color)?;

        let mut next = self.clone();
        next.events.entry(key.clone()).or_default().push(event);
        Some(next)
    }

    /// Merge a partial update over the event at `(key, id)`. No-op if
    /// the event is not found or the patch touches nothing. `id` and
    /// the date key are preserved; moving an event to another date is
    /// delete-then-recreate.
    pub fn update_event(&self, key: &DateKey, id: &str, patch: &EventPatch) -> Option<EventStore> {
        if patch.is_empty() {
            return None;
        }
        let list = self.events.get(key)?;
        let idx = list.iter().position(|e| e.id == id)?;

        let mut next = self.clone();
        let list = next.events.get_mut(key).unwrap();
        list[idx] = list[idx].apply(patch);
        Some(next)
    }

    /// Remove the event at `(key, id)`. Removing a date's last event
    /// removes the date key itself. No-op if not found.
    pub fn delete_event(&self, key: &DateKey, id: &str) -> Option<EventStore> {
        let mut next = self.clone();
        remove_one(&mut next.events, key, id).then_some(next)
    }

    /// Remove every `(key, id)` pair in one snapshot transition.
    /// Duplicate or missing pairs are tolerated per pair; the whole
    /// batch is a no-op only if nothing matched.
    pub fn batch_delete(&self, items: &[(DateKey, String)]) -> Option<EventStore> {
        if items.is_empty() {
            return None;
        }

        let mut next = self.clone();
        let mut changed = false;
        for (key, id) in items {
            changed |= remove_one(&mut next.events, key, id);
        }
        changed.then_some(next)
    }

    /// Copy the event at `(source, id)` onto each target date, one fresh
    /// id per copy. Targets are de-duplicated and the source date itself
    /// is dropped; the source event is never touched. No-op if the
    /// source is missing or no targets remain.
    pub fn copy_event_to_dates(
        &self,
        source: &DateKey,
        id: &str,
        targets: &[DateKey],
    ) -> Option<EventStore> {
        let event = self.events.get(source)?.iter().find(|e| e.id == id)?;

        let targets = dedup_keys(targets, Some(source));
        if targets.is_empty() {
            return None;
        }

        let mut next = self.clone();
        for key in targets {
            next.events
                .entry(key.clone())
                .or_default()
                .push(event.duplicate());
        }
        Some(next)
    }

    /// Add the same event to each date in one step, one fresh id per
    /// date. Unlike the copy path, a date appearing as its own target is
    /// not special-cased. No-op if the title trims to empty or the date
    /// list is empty.
    pub fn add_event_to_dates(
        &self,
        keys: &[DateKey],
        title: &str,
        time: Option<&str>,
        is_important: bool,
        color: Option<&str>,
    ) -> Option<EventStore> {
        if keys.is_empty() {
            return None;
        }
        let template = Event::new(title, time, is_important, color)?;

        let mut next = self.clone();
        for key in dedup_keys(keys, None) {
            next.events
                .entry(key.clone())
                .or_default()
                .push(template.duplicate());
        }
        Some(next)
    }
}

/// Remove `(key, id)` from the map, dropping the key if it empties.
/// Returns whether anything was removed.
fn remove_one(events: &mut BTreeMap<DateKey, Vec<Event>>, key: &DateKey, id: &str) -> bool {
    let Some(list) = events.get_mut(key) else {
        return false;
    };
    let before = list.len();
    list.retain(|e| e.id != id);
    if list.is_empty() {
        events.remove(key);
        return true;
    }
    before != list.len()
}

/// De-duplicate target keys, preserving first-seen order, optionally
/// excluding one key.
fn dedup_keys<'a>(keys: &'a [DateKey], exclude: Option<&DateKey>) -> Vec<&'a DateKey> {
    let mut seen = HashSet::new();
    keys.iter()
        .filter(|k| exclude != Some(*k))
        .filter(|k| seen.insert(*k))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{key, must_add};
    use super::*;

    fn id_of(store: &EventStore, k: &str, title: &str) -> String {
        store
            .events_for_date(&key(k))
            .iter()
            .find(|e| e.title == title)
            .map(|e| e.id.clone())
            .expect("event present")
    }

    #[test]
    fn test_add_event_appends_and_counts() {
        let store = EventStore::new();
        let store = must_add(&store, "2024-01-01", "A", "09:00", false);
        assert_eq!(store.event_count(&key("2024-01-01")), 1);

        let store = must_add(&store, "2024-01-01", "B", "08:00", false);
        assert_eq!(store.event_count(&key("2024-01-01")), 2);

        // Appended, not sorted
        let events = store.events_for_date(&key("2024-01-01"));
        assert_eq!(events[0].title, "A");
        assert_eq!(events[1].title, "B");
    }

    #[test]
    fn test_add_event_ids_unique_across_store() {
        let store = EventStore::new();
        let store = must_add(&store, "2024-01-01", "A", "09:00", false);
        let store = must_add(&store, "2024-02-01", "B", "09:00", false);
        let store = must_add(&store, "2024-02-01", "C", "09:00", false);

        let mut ids: Vec<&str> = store.all_events().iter().map(|(_, e)| e.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_add_event_blank_title_is_noop() {
        let store = must_add(&EventStore::new(), "2024-01-01", "A", "09:00", false);
        assert!(store
            .add_event(&key("2024-01-01"), "   ", Some("09:00"), false, None)
            .is_none());
        assert_eq!(store.event_count(&key("2024-01-01")), 1);
    }

    #[test]
    fn test_add_event_does_not_touch_previous_snapshot() {
        let before = must_add(&EventStore::new(), "2024-01-01", "A", "09:00", false);
        let _after = must_add(&before, "2024-01-01", "B", "10:00", false);
        assert_eq!(before.event_count(&key("2024-01-01")), 1);
    }

    #[test]
    fn test_update_event_merges_partial_fields() {
        let store = must_add(&EventStore::new(), "2024-01-01", "A", "09:00", false);
        let id = id_of(&store, "2024-01-01", "A");

        let patch = EventPatch {
            title: Some("Renamed".to_string()),
            is_important: Some(true),
            ..Default::default()
        };
        let store = store.update_event(&key("2024-01-01"), &id, &patch).unwrap();

        let event = &store.events_for_date(&key("2024-01-01"))[0];
        assert_eq!(event.id, id);
        assert_eq!(event.title, "Renamed");
        assert_eq!(event.time, "09:00");
        assert!(event.is_important);
    }

    #[test]
    fn test_update_event_empty_patch_is_noop() {
        let store = must_add(&EventStore::new(), "2024-01-01", "A", "09:00", false);
        let id = id_of(&store, "2024-01-01", "A");
        assert!(store
            .update_event(&key("2024-01-01"), &id, &EventPatch::default())
            .is_none());
    }

    #[test]
    fn test_update_event_missing_is_noop() {
        let store = must_add(&EventStore::new(), "2024-01-01", "A", "09:00", false);
        let patch = EventPatch {
            title: Some("X".to_string()),
            ..Default::default()
        };
        assert!(store
            .update_event(&key("2024-01-01"), "no-such-id", &patch)
            .is_none());
        assert!(store.update_event(&key("2024-12-31"), "x", &patch).is_none());
    }

    #[test]
    fn test_delete_last_event_removes_date_key() {
        let store = must_add(&EventStore::new(), "2024-01-01", "A", "09:00", false);
        let id = id_of(&store, "2024-01-01", "A");

        let store = store.delete_event(&key("2024-01-01"), &id).unwrap();
        assert_eq!(store.event_count(&key("2024-01-01")), 0);
        assert_eq!(store.date_count(), 0);
    }

    #[test]
    fn test_delete_non_last_event_preserves_order() {
        let store = EventStore::new();
        let store = must_add(&store, "2024-01-01", "A", "09:00", false);
        let store = must_add(&store, "2024-01-01", "B", "10:00", false);
        let store = must_add(&store, "2024-01-01", "C", "11:00", false);
        let id = id_of(&store, "2024-01-01", "B");

        let store = store.delete_event(&key("2024-01-01"), &id).unwrap();
        let titles: Vec<&str> = store
            .events_for_date(&key("2024-01-01"))
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let store = must_add(&EventStore::new(), "2024-01-01", "A", "09:00", false);
        assert!(store.delete_event(&key("2024-01-01"), "nope").is_none());
        assert!(store.delete_event(&key("2024-06-01"), "nope").is_none());
    }

    #[test]
    fn test_batch_delete_tolerates_missing_pairs() {
        let store = EventStore::new();
        let store = must_add(&store, "2024-01-01", "A", "09:00", false);
        let store = must_add(&store, "2024-01-02", "B", "09:00", false);
        let id_a = id_of(&store, "2024-01-01", "A");

        let items = vec![
            (key("2024-01-01"), id_a.clone()),
            (key("2024-01-01"), id_a), // duplicate pair
            (key("2024-01-02"), "already-gone".to_string()),
        ];
        let next = store.batch_delete(&items).unwrap();

        // Same outcome as the single valid deletion
        assert_eq!(next, store.delete_event(&key("2024-01-01"), &items[0].1).unwrap());
        assert_eq!(next.event_count(&key("2024-01-02")), 1);
    }

    #[test]
    fn test_batch_delete_all_missing_is_noop() {
        let store = must_add(&EventStore::new(), "2024-01-01", "A", "09:00", false);
        let items = vec![(key("2024-01-01"), "nope".to_string())];
        assert!(store.batch_delete(&items).is_none());
        assert!(store.batch_delete(&[]).is_none());
    }

    #[test]
    fn test_copy_collapses_duplicates_and_suppresses_self_target() {
        let store = must_add(&EventStore::new(), "2024-01-01", "A", "09:00", false);
        let id = id_of(&store, "2024-01-01", "A");

        let targets = vec![key("2024-01-05"), key("2024-01-05"), key("2024-01-01")];
        let next = store
            .copy_event_to_dates(&key("2024-01-01"), &id, &targets)
            .unwrap();

        assert_eq!(next.event_count(&key("2024-01-05")), 1);
        assert_eq!(next.event_count(&key("2024-01-01")), 1);
        assert_eq!(next.total_events(), 2);

        let copy = &next.events_for_date(&key("2024-01-05"))[0];
        assert_eq!(copy.title, "A");
        assert_ne!(copy.id, id);
    }

    #[test]
    fn test_copy_missing_source_or_empty_targets_is_noop() {
        let store = must_add(&EventStore::new(), "2024-01-01", "A", "09:00", false);
        let id = id_of(&store, "2024-01-01", "A");

        assert!(store
            .copy_event_to_dates(&key("2024-01-01"), "nope", &[key("2024-01-05")])
            .is_none());
        assert!(store.copy_event_to_dates(&key("2024-01-01"), &id, &[]).is_none());
        // Only self-targets left after filtering
        assert!(store
            .copy_event_to_dates(&key("2024-01-01"), &id, &[key("2024-01-01")])
            .is_none());
    }

    #[test]
    fn test_bulk_add_creates_one_event_per_unique_date() {
        let store = EventStore::new();
        let keys = vec![key("2024-01-01"), key("2024-01-02"), key("2024-01-01")];
        let store = store
            .add_event_to_dates(&keys, "Standup", Some("09:30"), false, None)
            .unwrap();

        assert_eq!(store.event_count(&key("2024-01-01")), 1);
        assert_eq!(store.event_count(&key("2024-01-02")), 1);

        let a = &store.events_for_date(&key("2024-01-01"))[0];
        let b = &store.events_for_date(&key("2024-01-02"))[0];
        assert_ne!(a.id, b.id);
        assert_eq!(a.title, b.title);
    }

    #[test]
    fn test_bulk_add_blank_title_or_no_dates_is_noop() {
        let store = EventStore::new();
        assert!(store
            .add_event_to_dates(&[key("2024-01-01")], "  ", None, false, None)
            .is_none());
        assert!(store.add_event_to_dates(&[], "Standup", None, false, None).is_none());
    }
}
