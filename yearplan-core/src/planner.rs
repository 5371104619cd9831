//! The caller-owned handle around the current store snapshot.
//!
//! `Planner` owns the latest `EventStore` snapshot and the persistence
//! adapter. Mutations are serialized behind a single writer lock and
//! swap in the snapshot a store mutation returns; readers clone the
//! published `Arc` and never wait on a writer's compute phase.

use std::sync::{Arc, Mutex, RwLock};

use crate::config::GlobalConfig;
use crate::date_key::DateKey;
use crate::error::PlannerResult;
use crate::event::EventPatch;
use crate::persist::{JsonFileAdapter, PersistenceAdapter};
use crate::store::EventStore;

pub struct Planner {
    current: RwLock<Arc<EventStore>>,
    writer: Mutex<()>,
    adapter: Box<dyn PersistenceAdapter>,
}

impl Planner {
    /// Open the planner backed by the configured JSON file slot.
    pub fn load() -> PlannerResult<Self> {
        let config = GlobalConfig::load()?;
        Ok(Self::open(Box::new(JsonFileAdapter::new(config.data_file()))))
    }

    /// Open the planner over any adapter. A missing or unparsable slot
    /// degrades to an empty store; load problems never reach the caller.
    pub fn open(adapter: Box<dyn PersistenceAdapter>) -> Self {
        let store = match adapter.load() {
            Some(data) => EventStore::from_json(&data).unwrap_or_else(|e| {
                log::debug!("persisted store unreadable, starting empty: {}", e);
                EventStore::new()
            }),
            None => EventStore::new(),
        };

        Planner {
            current: RwLock::new(Arc::new(store)),
            writer: Mutex::new(()),
            adapter,
        }
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> Arc<EventStore> {
        self.current.read().expect("store lock poisoned").clone()
    }

    /// Run one store mutation against the current snapshot, publish its
    /// result, and persist. Returns whether anything changed.
    ///
    /// The in-memory snapshot is authoritative the moment it is
    /// published; a failed save is logged and swallowed.
    fn apply<F>(&self, mutate: F) -> bool
    where
        F: FnOnce(&EventStore) -> Option<EventStore>,
    {
        let _guard = self.writer.lock().expect("writer lock poisoned");

        let snapshot = self.snapshot();
        let Some(next) = mutate(&snapshot) else {
            return false;
        };
        let next = Arc::new(next);
        *self.current.write().expect("store lock poisoned") = next.clone();

        match next.to_json() {
            Ok(data) => {
                if let Err(e) = self.adapter.save(&data) {
                    log::warn!("failed to persist events: {}", e);
                }
            }
            Err(e) => log::warn!("failed to serialize events: {}", e),
        }
        true
    }

    // MUTATIONS (see store::mutate for semantics):

    pub fn add_event(
        &self,
        key: &DateKey,
        title: &str,
        time: Option<&str>,
        is_important: bool,
        color: Option<&str>,
    ) -> bool {
        self.apply(|s| s.add_event(key, title, time, is_important, color))
    }

    pub fn update_event(&self, key: &DateKey, id: &str, patch: &EventPatch) -> bool {
        self.apply(|s| s.update_event(key, id, patch))
    }

    pub fn delete_event(&self, key: &DateKey, id: &str) -> bool {
        self.apply(|s| s.delete_event(key, id))
    }

    pub fn batch_delete(&self, items: &[(DateKey, String)]) -> bool {
        self.apply(|s| s.batch_delete(items))
    }

    pub fn copy_event_to_dates(&self, source: &DateKey, id: &str, targets: &[DateKey]) -> bool {
        self.apply(|s| s.copy_event_to_dates(source, id, targets))
    }

    pub fn add_event_to_dates(
        &self,
        keys: &[DateKey],
        title: &str,
        time: Option<&str>,
        is_important: bool,
        color: Option<&str>,
    ) -> bool {
        self.apply(|s| s.add_event_to_dates(keys, title, time, is_important, color))
    }
}
