//! JSON file persistence for baselines
//!
//! The on-disk format is a flat JSON object mapping each path to its hex
//! digest, indented with four spaces:
//!
//! ```json
//! {
//!     "data/a.txt": "ba7816bf..."
//! }
//! ```

use crate::error::IntegrityError;
use crate::store::SnapshotStore;
use crate::types::Snapshot;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Baseline store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file written first and then renamed over the baseline.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "baseline".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Encode a snapshot the way it is written to disk.
pub fn encode_snapshot(snapshot: &Snapshot) -> Result<Vec<u8>, IntegrityError> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    snapshot
        .serialize(&mut serializer)
        .map_err(|e| IntegrityError::Serialization(e.to_string()))?;
    buffer.push(b'\n');
    Ok(buffer)
}

impl SnapshotStore for JsonSnapshotStore {
    fn load(&self) -> Result<Snapshot, IntegrityError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No baseline found, starting empty");
                return Ok(Snapshot::new());
            }
            Err(e) => return Err(IntegrityError::io(&self.path, e)),
        };

        let snapshot: Snapshot =
            serde_json::from_str(&content).map_err(|e| IntegrityError::MalformedBaseline {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        debug!(path = %self.path.display(), entries = snapshot.len(), "Loaded baseline");
        Ok(snapshot)
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), IntegrityError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| IntegrityError::io(parent, e))?;
            }
        }

        let encoded = encode_snapshot(snapshot)?;
        let staging = self.staging_path();
        fs::write(&staging, encoded).map_err(|e| IntegrityError::io(&staging, e))?;
        if let Err(e) = fs::rename(&staging, &self.path) {
            let _ = fs::remove_file(&staging);
            return Err(IntegrityError::io(&self.path, e));
        }

        info!(path = %self.path.display(), entries = snapshot.len(), "Saved baseline");
        Ok(())
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
