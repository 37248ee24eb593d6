//! Filesystem walker for listing the regular files under a root

use crate::error::IntegrityError;
use crate::tree::path::resolve_location;
use std::collections::HashSet;
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Walker configuration
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Follow symbolic links to files and directories (default: true).
    ///
    /// Symlink cycles are detected against the ancestor chain and reported
    /// as failures instead of being descended into.
    pub follow_symlinks: bool,
    /// Path components to skip entirely (e.g., ".git")
    pub ignore_patterns: Vec<String>,
    /// Maximum depth to traverse (None = unlimited)
    pub max_depth: Option<usize>,
    /// Resolved locations of files that must never appear in a listing.
    ///
    /// Matched against where an entry lives, not what it points to, so a
    /// symlink to an excluded file is still listed.
    pub exclude_files: HashSet<PathBuf>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: true,
            ignore_patterns: Vec::new(),
            max_depth: None,
            exclude_files: HashSet::new(),
        }
    }
}

/// An entry the walker could not list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkFailure {
    pub path: Option<PathBuf>,
    pub message: String,
}

/// Result of a walk: every listable regular file plus non-fatal failures
#[derive(Debug, Clone, Default)]
pub struct WalkOutcome {
    pub files: Vec<PathBuf>,
    pub failures: Vec<WalkFailure>,
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the filesystem and collect all regular files
    ///
    /// Only a missing or unreadable root is an error. Anything below the
    /// root that cannot be listed is recorded in `failures` and skipped.
    /// Files are returned sorted by path.
    pub fn walk(&self) -> Result<WalkOutcome, IntegrityError> {
        let root_meta =
            std::fs::metadata(&self.root).map_err(|e| IntegrityError::io(&self.root, e))?;
        if !root_meta.is_dir() {
            return Err(IntegrityError::io(
                &self.root,
                io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
            ));
        }
        let _ = std::fs::read_dir(&self.root).map_err(|e| IntegrityError::io(&self.root, e))?;

        let mut outcome = WalkOutcome::default();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .into_iter()
            .filter_entry(|entry| !self.should_ignore(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let failure = describe_walk_error(&err);
                    warn!(
                        path = ?failure.path,
                        error = %failure.message,
                        "Skipping unreadable entry"
                    );
                    outcome.failures.push(failure);
                    continue;
                }
            };

            // With follow_symlinks the file type is that of the link target;
            // without it, links are neither files nor directories and drop out here.
            if !entry.file_type().is_file() {
                continue;
            }

            if self.is_excluded(&entry) {
                debug!(path = %entry.path().display(), "Excluded from walk");
                continue;
            }

            outcome.files.push(entry.into_path());
        }

        outcome.files.sort();
        Ok(outcome)
    }

    /// Check if an entry matches an ignore pattern. The root itself is never ignored.
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        self.config
            .ignore_patterns
            .iter()
            .any(|pattern| name == pattern.as_str())
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        if self.config.exclude_files.is_empty() {
            return false;
        }
        resolve_location(entry.path())
            .map(|location| self.config.exclude_files.contains(&location))
            .unwrap_or(false)
    }
}

fn describe_walk_error(err: &walkdir::Error) -> WalkFailure {
    let path = err.path().map(|p| p.to_path_buf());
    let message = if let Some(ancestor) = err.loop_ancestor() {
        format!("symlink cycle back to {}", ancestor.display())
    } else if let Some(io_err) = err.io_error() {
        io_err.to_string()
    } else {
        err.to_string()
    };
    WalkFailure { path, message }
}
