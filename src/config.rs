//! Configuration System
//!
//! Layered configuration for the monitor: built-in defaults, a user-level
//! file, a workspace file and `HASHWATCH__*` environment variables, in that
//! order of precedence. Everything the monitor needs, including the baseline
//! location, arrives through [`MonitorConfig`]; nothing is read from
//! process-wide state after loading.

use crate::error::IntegrityError;
use crate::logging::LoggingConfig;
use crate::tree::hasher::HashAlgorithm;
use crate::tree::path::resolve_location;
use crate::tree::walker::WalkerConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Where the baseline snapshot is stored
    #[serde(default = "default_baseline_path")]
    pub baseline_path: PathBuf,

    /// Hash algorithm name (see [`HashAlgorithm::names`])
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Tree traversal settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Tree traversal settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Follow symbolic links while scanning
    #[serde(default = "default_true")]
    pub follow_symlinks: bool,

    /// File or directory names to skip (matched per path component)
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// Maximum traversal depth below the root
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Leave the baseline file out of scans when it lives inside the tree
    #[serde(default = "default_true")]
    pub exclude_baseline: bool,
}

pub(crate) fn default_baseline_path() -> PathBuf {
    PathBuf::from("file_hashes.json")
}

pub(crate) fn default_algorithm() -> String {
    HashAlgorithm::default().as_str().to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: true,
            ignore_patterns: Vec::new(),
            max_depth: None,
            exclude_baseline: true,
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            baseline_path: default_baseline_path(),
            algorithm: default_algorithm(),
            scan: ScanConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Algorithm(String),
    Baseline(String),
    Scan(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Algorithm(msg) => write!(f, "Algorithm: {}", msg),
            ValidationError::Baseline(msg) => write!(f, "Baseline: {}", msg),
            ValidationError::Scan(msg) => write!(f, "Scan: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl MonitorConfig {
    /// Resolve the configured algorithm name.
    pub fn hash_algorithm(&self) -> Result<HashAlgorithm, IntegrityError> {
        self.algorithm.parse()
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.hash_algorithm() {
            errors.push(ValidationError::Algorithm(e.to_string()));
        }

        if self.baseline_path.as_os_str().is_empty() {
            errors.push(ValidationError::Baseline(
                "Baseline path cannot be empty".to_string(),
            ));
        }

        if self.scan.ignore_patterns.iter().any(|p| p.trim().is_empty()) {
            errors.push(ValidationError::Scan(
                "Ignore patterns cannot be empty".to_string(),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Walker settings derived from the scan section.
    pub fn walker_config(&self) -> WalkerConfig {
        let mut exclude_files = HashSet::new();
        if self.scan.exclude_baseline {
            if let Some(resolved) = resolve_location(&self.baseline_path) {
                exclude_files.insert(resolved);
            }
        }

        WalkerConfig {
            follow_symlinks: self.scan.follow_symlinks,
            ignore_patterns: self.scan.ignore_patterns.clone(),
            max_depth: self.scan.max_depth,
            exclude_files,
        }
    }
}

/// Collapse validation errors into a single configuration error.
pub fn validation_failure(errors: Vec<ValidationError>) -> IntegrityError {
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    IntegrityError::Config(format!(
        "Configuration validation failed:\n{}",
        messages.join("\n")
    ))
}
