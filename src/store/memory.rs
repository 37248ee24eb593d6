//! In-memory baseline store, for embedding and tests.

use crate::error::IntegrityError;
use crate::store::SnapshotStore;
use crate::types::Snapshot;
use parking_lot::RwLock;

#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    baseline: RwLock<Option<Snapshot>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a baseline.
    pub fn with_baseline(snapshot: Snapshot) -> Self {
        Self {
            baseline: RwLock::new(Some(snapshot)),
        }
    }

    pub fn has_baseline(&self) -> bool {
        self.baseline.read().is_some()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Result<Snapshot, IntegrityError> {
        Ok(self.baseline.read().clone().unwrap_or_default())
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), IntegrityError> {
        *self.baseline.write() = Some(snapshot.clone());
        Ok(())
    }
}
