//! Batch reconciliation of watch folders against the registry.

pub mod engine;

pub use engine::{SyncEngine, SyncError, SyncStats, folder_or_not_found};
