//! Core event store for the yearplan planner.
//!
//! This crate holds everything below the presentation layer:
//! - `Event` and `DateKey` types for calendar entries
//! - `EventStore`, the date-keyed event mapping with its queries and
//!   snapshot-producing mutations
//! - `Planner`, the handle that owns the current snapshot and keeps it
//!   persisted through a `PersistenceAdapter`

pub mod config;
pub mod date_key;
pub mod error;
pub mod event;
pub mod persist;
pub mod planner;
pub mod store;

pub use date_key::DateKey;
pub use error::{PlannerError, PlannerResult};
pub use event::{Event, EventPatch};
pub use persist::{JsonFileAdapter, MemoryAdapter, PersistenceAdapter};
pub use planner::Planner;
pub use store::EventStore;
