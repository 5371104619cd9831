//! Durable storage for the serialized store.
//!
//! The store persists as one JSON document in a single named slot. The
//! adapter only moves opaque strings; (de)serialization stays with
//! `EventStore` so the contract matches any key-value medium.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::PlannerResult;

/// A single durable load/save slot for the serialized store.
pub trait PersistenceAdapter: Send + Sync {
    /// Read the slot. `None` means missing; unreadable content is also
    /// reported as `None` so callers degrade to an empty store.
    fn load(&self) -> Option<String>;

    /// Overwrite the slot with the full serialized store.
    fn save(&self, data: &str) -> PlannerResult<()>;
}

/// Shared adapters work wherever an adapter does.
impl<A: PersistenceAdapter + ?Sized> PersistenceAdapter for std::sync::Arc<A> {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, data: &str) -> PlannerResult<()> {
        (**self).save(data)
    }
}

/// Stores the serialized store as a JSON file on disk.
pub struct JsonFileAdapter {
    path: PathBuf,
}

impl JsonFileAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileAdapter { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PersistenceAdapter for JsonFileAdapter {
    fn load(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Some(content),
            Err(e) => {
                log::debug!("could not read {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn save(&self, data: &str) -> PlannerResult<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        // Write-then-rename so a crash mid-write never truncates the slot
        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, data)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

/// In-memory slot for tests: no filesystem, counts saves.
#[derive(Default)]
pub struct MemoryAdapter {
    slot: Mutex<Option<String>>,
    saves: Mutex<usize>,
}

impl MemoryAdapter {
    pub fn new() -> Self {
        MemoryAdapter::default()
    }

    /// Pre-load the slot, e.g. with corrupt data.
    pub fn with_contents(data: &str) -> Self {
        MemoryAdapter {
            slot: Mutex::new(Some(data.to_string())),
            saves: Mutex::new(0),
        }
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }

    /// The last saved payload, if any.
    pub fn contents(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }
}

impl PersistenceAdapter for MemoryAdapter {
    fn load(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }

    fn save(&self, data: &str) -> PlannerResult<()> {
        *self.slot.lock().unwrap() = Some(data.to_string());
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_adapter_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = JsonFileAdapter::new(dir.path().join("events.json"));

        assert_eq!(adapter.load(), None);
        adapter.save(r#"{"2024-01-01":[]}"#).unwrap();
        assert_eq!(adapter.load().unwrap(), r#"{"2024-01-01":[]}"#);
    }

    #[test]
    fn test_file_adapter_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = JsonFileAdapter::new(dir.path().join("nested/deeper/events.json"));
        adapter.save("{}").unwrap();
        assert_eq!(adapter.load().unwrap(), "{}");
    }

    #[test]
    fn test_file_adapter_overwrites_whole_slot() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = JsonFileAdapter::new(dir.path().join("events.json"));
        adapter.save("first").unwrap();
        adapter.save("second").unwrap();
        assert_eq!(adapter.load().unwrap(), "second");
    }

    #[test]
    fn test_memory_adapter_counts_saves() {
        let adapter = MemoryAdapter::new();
        assert_eq!(adapter.save_count(), 0);
        adapter.save("a").unwrap();
        adapter.save("b").unwrap();
        assert_eq!(adapter.save_count(), 2);
        assert_eq!(adapter.contents().unwrap(), "b");
    }
}
