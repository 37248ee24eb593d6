//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::IntegrityError;

/// Exit status for operational failures. Findings never change the status.
pub const EXIT_FAILURE: i32 = 1;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &IntegrityError) -> String {
    match e {
        IntegrityError::MalformedBaseline { .. } => format!(
            "{}\nRe-run `hashwatch init` to rebuild the baseline.",
            e
        ),
        _ => e.to_string(),
    }
}

/// Exit status for a failed invocation.
pub fn exit_code(_e: &IntegrityError) -> i32 {
    EXIT_FAILURE
}
