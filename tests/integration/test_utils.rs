//! Shared test utilities for integration tests
//!
//! Serializes access to process environment variables and builds small
//! directory trees on disk.

use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ISOLATED_VARS: &[&str] = &[
    "HOME",
    "XDG_CONFIG_HOME",
    "HASHWATCH_ENV",
    "HASHWATCH__ALGORITHM",
    "HASHWATCH__BASELINE_PATH",
    "HASHWATCH__SCAN__MAX_DEPTH",
];

/// Run `f` with HOME and XDG_CONFIG_HOME pointing into `home` and every
/// HASHWATCH variable cleared. The previous values are restored afterwards.
pub fn with_clean_env<F, R>(home: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let saved: Vec<(&str, Option<String>)> = ISOLATED_VARS
        .iter()
        .map(|name| (*name, std::env::var(name).ok()))
        .collect();

    for name in ISOLATED_VARS {
        std::env::remove_var(name);
    }
    std::env::set_var("HOME", home.path());
    std::env::set_var("XDG_CONFIG_HOME", home.path().join(".config"));

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

    for (name, value) in saved {
        match value {
            Some(value) => std::env::set_var(name, value),
            None => std::env::remove_var(name),
        }
    }

    match result {
        Ok(value) => value,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

/// Write `(relative path, content)` pairs under `root`, creating directories as needed.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

/// Snapshot key for a file under `root`.
pub fn key(root: &Path, relative: &str) -> String {
    hashwatch::tree::path::snapshot_key(&root.join(relative))
}
