//! Formatters shared across commands.

use crate::tree::hasher::HashAlgorithm;
use crate::tree::scanner::{FailureStage, ScanFailure};

/// One line per entry left out of a scan, for stderr.
pub fn format_failure(failure: &ScanFailure) -> String {
    match failure.stage {
        FailureStage::Hash => format!("Error hashing {}: {}", failure.path, failure.reason),
        FailureStage::Walk if failure.path.is_empty() => {
            format!("Error reading directory tree: {}", failure.reason)
        }
        FailureStage::Walk => format!("Error reading {}: {}", failure.path, failure.reason),
    }
}

pub fn format_algorithms_text() -> String {
    let mut output = String::from("Supported hash algorithms:\n");
    for algorithm in HashAlgorithm::all() {
        if *algorithm == HashAlgorithm::default() {
            output.push_str(&format!("  {} (default)\n", algorithm));
        } else {
            output.push_str(&format!("  {}\n", algorithm));
        }
    }
    output
}
