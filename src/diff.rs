//! Diff Engine - Compare a baseline snapshot against a fresh scan
//!
//! Classifies every path known to either snapshot as added, removed,
//! changed or unchanged. Set operations only; order never matters.

use crate::types::{DiffResult, Snapshot};

/// Engine for comparing a baseline against a current snapshot
pub struct DiffEngine;

impl DiffEngine {
    /// Compare `current` against `baseline`.
    ///
    /// * added: in current, not in baseline
    /// * removed: in baseline, not in current
    /// * changed: in both with different digests
    pub fn diff(baseline: &Snapshot, current: &Snapshot) -> DiffResult {
        let mut result = DiffResult::default();

        for (path, digest) in current {
            match baseline.get(path) {
                None => {
                    result.added.insert(path.clone());
                }
                Some(previous) if previous != digest => {
                    result.changed.insert(path.clone());
                }
                Some(_) => result.unchanged += 1,
            }
        }

        result.removed = baseline
            .paths()
            .filter(|path| !current.contains(path))
            .map(str::to_string)
            .collect();

        result
    }
}
