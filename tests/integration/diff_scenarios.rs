//! Integration tests for change detection between an init and a check

use hashwatch::store::MemorySnapshotStore;
use hashwatch::tree::hasher::HashAlgorithm;
use hashwatch::{DiffEngine, Digest, Monitor, Scanner, Snapshot};
use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;

use crate::integration::{key, write_tree};

fn snapshot(entries: &[(&str, &str)]) -> Snapshot {
    entries
        .iter()
        .map(|(p, d)| (p.to_string(), Digest::from(*d)))
        .collect()
}

fn set(items: &[String]) -> BTreeSet<String> {
    items.iter().cloned().collect()
}

fn monitor(algorithm: HashAlgorithm) -> Monitor {
    Monitor::new(Scanner::new(algorithm), Box::new(MemorySnapshotStore::new()))
}

#[test]
fn test_empty_baseline_scenario() {
    let diff = DiffEngine::diff(&Snapshot::new(), &snapshot(&[("a", "h1"), ("b", "h2")]));
    assert_eq!(diff.added, set(&["a".into(), "b".into()]));
    assert!(diff.removed.is_empty());
    assert!(diff.changed.is_empty());
}

#[test]
fn test_no_change_scenario() {
    let diff = DiffEngine::diff(&snapshot(&[("a", "h1")]), &snapshot(&[("a", "h1")]));
    assert!(diff.is_clean());
}

#[test]
fn test_pure_modification_scenario() {
    let diff = DiffEngine::diff(&snapshot(&[("a", "h1")]), &snapshot(&[("a", "h2")]));
    assert_eq!(diff.changed, set(&["a".into()]));
    assert!(diff.added.is_empty());
    assert!(diff.removed.is_empty());
}

#[test]
fn test_mixed_scenario() {
    let diff = DiffEngine::diff(
        &snapshot(&[("a", "h1"), ("b", "h2")]),
        &snapshot(&[("b", "h2"), ("c", "h3")]),
    );
    assert_eq!(diff.added, set(&["c".into()]));
    assert_eq!(diff.removed, set(&["a".into()]));
    assert!(diff.changed.is_empty());
}

#[test]
fn test_filesystem_changes_are_classified() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(
        root,
        &[("keep.txt", "same"), ("edit.txt", "before"), ("drop.txt", "bye"), ("nested/deep.txt", "deep")],
    );

    let monitor = monitor(HashAlgorithm::Sha256);
    monitor.initialize(root).unwrap();

    fs::write(root.join("edit.txt"), "after").unwrap();
    fs::remove_file(root.join("drop.txt")).unwrap();
    write_tree(root, &[("nested/new.txt", "hello")]);

    let check = monitor.check(root).unwrap();

    assert_eq!(check.diff.added, set(&[key(root, "nested/new.txt")]));
    assert_eq!(check.diff.removed, set(&[key(root, "drop.txt")]));
    assert_eq!(check.diff.changed, set(&[key(root, "edit.txt")]));
    assert_eq!(check.diff.unchanged, 2);
}

#[test]
fn test_touch_without_content_change_is_clean() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(root, &[("a.txt", "content")]);

    let monitor = monitor(HashAlgorithm::Blake3);
    monitor.initialize(root).unwrap();

    // Rewrite identical content; only timestamps move.
    fs::write(root.join("a.txt"), "content").unwrap();

    assert!(monitor.check(root).unwrap().diff.is_clean());
}

#[test]
fn test_move_reports_removal_and_addition() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(root, &[("old/name.txt", "payload")]);

    let monitor = monitor(HashAlgorithm::Sha256);
    monitor.initialize(root).unwrap();

    fs::create_dir_all(root.join("new")).unwrap();
    fs::rename(root.join("old/name.txt"), root.join("new/name.txt")).unwrap();

    let check = monitor.check(root).unwrap();
    assert_eq!(check.diff.removed, set(&[key(root, "old/name.txt")]));
    assert_eq!(check.diff.added, set(&[key(root, "new/name.txt")]));
    assert!(check.diff.changed.is_empty());
}

#[test]
fn test_emptied_tree_reports_everything_removed() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(root, &[("a.txt", "a"), ("b.txt", "b")]);

    let monitor = monitor(HashAlgorithm::Sha256);
    monitor.initialize(root).unwrap();
    fs::remove_file(root.join("a.txt")).unwrap();
    fs::remove_file(root.join("b.txt")).unwrap();

    let check = monitor.check(root).unwrap();
    assert_eq!(check.diff.removed.len(), 2);
    assert_eq!(check.current_files, 0);
}

#[test]
fn test_switching_algorithm_reports_every_file_changed() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(root, &[("a.txt", "a"), ("b.txt", "b")]);

    let store = MemorySnapshotStore::new();
    let baseline = Scanner::new(HashAlgorithm::Sha256).scan(root).unwrap().snapshot;
    hashwatch::SnapshotStore::save(&store, &baseline).unwrap();

    let monitor = Monitor::new(Scanner::new(HashAlgorithm::Sha512), Box::new(store));
    let check = monitor.check(root).unwrap();
    assert_eq!(check.diff.changed.len(), 2);
}
