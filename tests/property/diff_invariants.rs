//! Property-based tests for diff classification and store round-trips

use hashwatch::store::{JsonSnapshotStore, SnapshotStore};
use hashwatch::{DiffEngine, Digest, Snapshot};
use proptest::prelude::*;
use std::collections::BTreeMap;
use tempfile::TempDir;

/// Small path and digest alphabets so snapshots overlap often.
fn snapshot_strategy() -> impl Strategy<Value = Snapshot> {
    prop::collection::btree_map("[a-f]{1,2}", "[0-2]", 0..12).prop_map(|entries: BTreeMap<String, String>| {
        entries
            .into_iter()
            .map(|(path, digest)| (path, Digest::from(digest)))
            .collect()
    })
}

proptest! {
    /// Every known path lands in exactly one class
    #[test]
    fn test_diff_is_complete_and_disjoint(
        baseline in snapshot_strategy(),
        current in snapshot_strategy(),
    ) {
        let diff = DiffEngine::diff(&baseline, &current);

        let mut all_paths: Vec<&str> = baseline.paths().chain(current.paths()).collect();
        all_paths.sort();
        all_paths.dedup();

        let mut unchanged = 0;
        for path in &all_paths {
            let memberships = [
                diff.added.contains(*path),
                diff.removed.contains(*path),
                diff.changed.contains(*path),
            ]
            .iter()
            .filter(|m| **m)
            .count();
            prop_assert!(memberships <= 1, "{} classified twice", path);
            if memberships == 0 {
                unchanged += 1;
                prop_assert_eq!(baseline.get(path), current.get(path));
            }
        }

        prop_assert_eq!(unchanged, diff.unchanged);
        prop_assert_eq!(diff.total() + diff.unchanged, all_paths.len());
    }

    /// Each class agrees with its set definition
    #[test]
    fn test_diff_matches_set_definitions(
        baseline in snapshot_strategy(),
        current in snapshot_strategy(),
    ) {
        let diff = DiffEngine::diff(&baseline, &current);

        for path in &diff.added {
            prop_assert!(current.contains(path) && !baseline.contains(path));
        }
        for path in &diff.removed {
            prop_assert!(baseline.contains(path) && !current.contains(path));
        }
        for path in &diff.changed {
            prop_assert!(baseline.get(path).is_some());
            prop_assert_ne!(baseline.get(path), current.get(path));
        }
    }

    /// Comparing a snapshot with itself finds nothing
    #[test]
    fn test_self_diff_is_clean(snapshot in snapshot_strategy()) {
        let diff = DiffEngine::diff(&snapshot, &snapshot);
        prop_assert!(diff.is_clean());
        prop_assert_eq!(diff.unchanged, snapshot.len());
    }

    /// Saving then loading yields the same snapshot
    #[test]
    fn test_store_round_trip(snapshot in snapshot_strategy()) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonSnapshotStore::new(temp_dir.path().join("file_hashes.json"));
        store.save(&snapshot).unwrap();
        prop_assert_eq!(store.load().unwrap(), snapshot);
    }
}
