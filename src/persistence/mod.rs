//! Snapshot persistence
//!
//! Features:
//! - Flat JSON snapshot of roster and round history
//! - Atomic replace (tmp file, then rename over the snapshot)
//! - Missing snapshot loads as an empty game, malformed one is an error

pub mod snapshot;
pub mod store;

pub use store::{JsonFileStore, MemoryStore, SnapshotStore};
