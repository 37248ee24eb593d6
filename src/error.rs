//! Error types for the hashwatch integrity monitor.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop an init or check invocation.
///
/// Problems confined to a single file during a scan are not errors; they are
/// collected as [`crate::tree::scanner::ScanFailure`] values instead.
#[derive(Debug, Error)]
pub enum IntegrityError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported hash algorithm: {0} (supported: {})", crate::tree::hasher::HashAlgorithm::names().join(", "))]
    UnsupportedAlgorithm(String),

    #[error("Malformed baseline {}: {reason}", path.display())]
    MalformedBaseline { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl IntegrityError {
    /// Wrap an I/O error together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IntegrityError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for IntegrityError {
    fn from(err: config::ConfigError) -> Self {
        IntegrityError::Config(err.to_string())
    }
}
