//! Monitor: wires the scanner, the baseline store and the diff engine
//! into the two operator-facing modes, initialize and check.

use crate::config::{validation_failure, MonitorConfig};
use crate::diff::DiffEngine;
use crate::error::IntegrityError;
use crate::store::{JsonSnapshotStore, SnapshotStore};
use crate::tree::hasher::HashAlgorithm;
use crate::tree::scanner::{ScanFailure, Scanner};
use crate::types::DiffResult;
use std::path::{Path, PathBuf};
use tracing::info;

/// Outcome of initializing a baseline
#[derive(Debug, Clone)]
pub struct InitSummary {
    pub root: PathBuf,
    pub algorithm: HashAlgorithm,
    pub files_hashed: usize,
    pub failures: Vec<ScanFailure>,
    pub baseline_path: Option<PathBuf>,
}

/// Outcome of checking a tree against its baseline
#[derive(Debug, Clone)]
pub struct CheckSummary {
    pub root: PathBuf,
    pub algorithm: HashAlgorithm,
    pub diff: DiffResult,
    pub failures: Vec<ScanFailure>,
    pub baseline_files: usize,
    pub current_files: usize,
}

pub struct Monitor {
    scanner: Scanner,
    store: Box<dyn SnapshotStore>,
}

impl Monitor {
    pub fn new(scanner: Scanner, store: Box<dyn SnapshotStore>) -> Self {
        Self { scanner, store }
    }

    /// Build a monitor backed by the JSON baseline named in `config`.
    ///
    /// The algorithm is resolved here, before any scanning can start.
    pub fn from_config(config: &MonitorConfig) -> Result<Self, IntegrityError> {
        let algorithm = config.hash_algorithm()?;
        config.validate().map_err(validation_failure)?;

        let scanner = Scanner::with_config(algorithm, config.walker_config());
        let store = JsonSnapshotStore::new(&config.baseline_path);
        Ok(Self::new(scanner, Box::new(store)))
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.scanner.algorithm()
    }

    /// Scan `root` and replace the stored baseline with the result.
    pub fn initialize(&self, root: &Path) -> Result<InitSummary, IntegrityError> {
        info!(root = %root.display(), algorithm = %self.algorithm(), "Initializing baseline");

        let report = self.scanner.scan(root)?;
        self.store.save(&report.snapshot)?;

        Ok(InitSummary {
            root: root.to_path_buf(),
            algorithm: self.algorithm(),
            files_hashed: report.snapshot.len(),
            failures: report.failures,
            baseline_path: self.store.location().map(Path::to_path_buf),
        })
    }

    /// Scan `root` and diff it against the stored baseline.
    ///
    /// A missing baseline compares as empty, so every file is reported added.
    pub fn check(&self, root: &Path) -> Result<CheckSummary, IntegrityError> {
        info!(root = %root.display(), algorithm = %self.algorithm(), "Checking integrity");

        let baseline = self.store.load()?;
        let report = self.scanner.scan(root)?;
        let diff = DiffEngine::diff(&baseline, &report.snapshot);

        info!(
            added = diff.added.len(),
            removed = diff.removed.len(),
            changed = diff.changed.len(),
            unchanged = diff.unchanged,
            "Check complete"
        );

        Ok(CheckSummary {
            root: root.to_path_buf(),
            algorithm: self.algorithm(),
            baseline_files: baseline.len(),
            current_files: report.snapshot.len(),
            diff,
            failures: report.failures,
        })
    }
}
