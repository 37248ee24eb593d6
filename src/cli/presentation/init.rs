//! Init command presentation.

use crate::monitor::InitSummary;
use serde_json::json;

pub fn format_init_text(summary: &InitSummary) -> String {
    let mut output = format!(
        "Initializing hash database for {}...\n",
        summary.root.display()
    );
    output.push_str(&format!(
        "Hashed {} file(s) with {}.\n",
        summary.files_hashed, summary.algorithm
    ));
    if !summary.failures.is_empty() {
        output.push_str(&format!(
            "Skipped {} file(s) that could not be read.\n",
            summary.failures.len()
        ));
    }
    output.push_str("Initialization complete. Hash database saved.");
    output
}

pub fn format_init_json(summary: &InitSummary) -> serde_json::Value {
    json!({
        "command": "init",
        "root": summary.root.display().to_string(),
        "algorithm": summary.algorithm,
        "files_hashed": summary.files_hashed,
        "baseline": summary.baseline_path.as_ref().map(|p| p.display().to_string()),
        "failures": summary.failures,
        "completed_at": chrono::Utc::now().to_rfc3339(),
    })
}
