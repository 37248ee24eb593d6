//! Snapshot Store
//!
//! Persists the baseline snapshot between an init and later checks.
//! A store holds exactly one baseline; saving replaces it wholesale.

pub mod memory;
pub mod persistence;

pub use memory::MemorySnapshotStore;
pub use persistence::JsonSnapshotStore;

use crate::error::IntegrityError;
use crate::types::Snapshot;
use std::path::Path;

/// Snapshot Store interface
pub trait SnapshotStore {
    /// Load the stored baseline.
    ///
    /// Returns an empty snapshot when no baseline has been saved yet.
    fn load(&self) -> Result<Snapshot, IntegrityError>;

    /// Replace the stored baseline with `snapshot`.
    fn save(&self, snapshot: &Snapshot) -> Result<(), IntegrityError>;

    /// Where the baseline lives on disk, if anywhere.
    fn location(&self) -> Option<&Path> {
        None
    }
}
