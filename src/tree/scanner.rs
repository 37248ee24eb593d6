//! Tree scanner: walk a root and hash every regular file into a snapshot

use crate::error::IntegrityError;
use crate::tree::hasher::{self, HashAlgorithm};
use crate::tree::path::snapshot_key;
use crate::tree::walker::{WalkFailure, Walker, WalkerConfig};
use crate::types::Snapshot;
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

const KEY_COLLISION: &str = "another file maps to the same snapshot key";

/// Where in a scan an entry was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureStage {
    /// The entry could not be listed: unreadable directory, dangling link, cycle
    Walk,
    /// The file was listed but could not be hashed or keyed
    Hash,
}

/// An entry that was left out of a snapshot, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanFailure {
    pub path: String,
    pub reason: String,
    pub stage: FailureStage,
}

impl From<WalkFailure> for ScanFailure {
    fn from(failure: WalkFailure) -> Self {
        Self {
            path: failure
                .path
                .as_deref()
                .map(snapshot_key)
                .unwrap_or_default(),
            reason: failure.message,
            stage: FailureStage::Walk,
        }
    }
}

/// Snapshot of a tree plus the files that could not be hashed
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub snapshot: Snapshot,
    pub failures: Vec<ScanFailure>,
}

/// Scans a directory tree into a [`Snapshot`]
#[derive(Debug, Clone)]
pub struct Scanner {
    algorithm: HashAlgorithm,
    config: WalkerConfig,
}

impl Scanner {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            config: WalkerConfig::default(),
        }
    }

    pub fn with_config(algorithm: HashAlgorithm, config: WalkerConfig) -> Self {
        Self { algorithm, config }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Hash every regular file under `root`.
    ///
    /// Fails only when the root itself cannot be listed. A file that cannot
    /// be read is logged, recorded in [`ScanReport::failures`] and left out
    /// of the snapshot; the rest of the tree is still hashed. Files whose
    /// keys collide are all left out and reported, never silently merged.
    pub fn scan(&self, root: &Path) -> Result<ScanReport, IntegrityError> {
        let outcome = Walker::with_config(root.to_path_buf(), self.config.clone()).walk()?;

        let mut report = ScanReport {
            snapshot: Snapshot::new(),
            failures: outcome.failures.into_iter().map(ScanFailure::from).collect(),
        };
        let mut collided: HashSet<String> = HashSet::new();

        for file in outcome.files {
            let key = snapshot_key(&file);
            match hasher::hash_file(&file, self.algorithm) {
                Ok(digest) => {
                    debug!(path = %key, digest = %digest, "Hashed file");
                    if collided.contains(&key) {
                        report.failures.push(collision(key));
                    } else if report.snapshot.insert(key.clone(), digest).is_some() {
                        warn!(path = %key, "Snapshot key collision");
                        report.snapshot.remove(&key);
                        collided.insert(key.clone());
                        report.failures.push(collision(key.clone()));
                        report.failures.push(collision(key));
                    }
                }
                Err(err) => {
                    let reason = match err {
                        IntegrityError::Io { source, .. } => source.to_string(),
                        other => other.to_string(),
                    };
                    warn!(path = %key, error = %reason, "Failed to hash file");
                    report.failures.push(ScanFailure {
                        path: key,
                        reason,
                        stage: FailureStage::Hash,
                    });
                }
            }
        }

        info!(
            root = %root.display(),
            algorithm = %self.algorithm,
            files = report.snapshot.len(),
            failures = report.failures.len(),
            "Scan complete"
        );

        Ok(report)
    }
}

fn collision(path: String) -> ScanFailure {
    ScanFailure {
        path,
        reason: KEY_COLLISION.to_string(),
        stage: FailureStage::Hash,
    }
}
