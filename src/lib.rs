//! hashwatch: File Integrity Monitoring
//!
//! Records a baseline of content hashes for every file under a directory and
//! later reports which files were added, removed or modified since.

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod logging;
pub mod monitor;
pub mod store;
pub mod tree;
pub mod types;

pub use diff::DiffEngine;
pub use error::IntegrityError;
pub use monitor::{CheckSummary, InitSummary, Monitor};
pub use store::{JsonSnapshotStore, MemorySnapshotStore, SnapshotStore};
pub use tree::hasher::HashAlgorithm;
pub use tree::scanner::{FailureStage, ScanFailure, ScanReport, Scanner};
pub use types::{ChangeKind, Digest, DiffResult, Snapshot};
