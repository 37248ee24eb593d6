//! Check command presentation.

use crate::monitor::CheckSummary;
use serde_json::json;
use std::collections::BTreeSet;

fn push_section(output: &mut String, title: &str, marker: char, paths: &BTreeSet<String>) {
    if paths.is_empty() {
        return;
    }
    output.push_str(title);
    output.push('\n');
    for path in paths {
        output.push_str(&format!("  {} {}\n", marker, path));
    }
}

pub fn format_check_text(summary: &CheckSummary) -> String {
    let mut output = format!(
        "Checking file integrity in {}...\n",
        summary.root.display()
    );

    if summary.diff.is_clean() {
        output.push_str("No file changes detected. All files are intact.");
        return output;
    }

    push_section(&mut output, "Added files:", '+', &summary.diff.added);
    push_section(&mut output, "Removed files:", '-', &summary.diff.removed);
    push_section(&mut output, "Modified files:", '*', &summary.diff.changed);

    while output.ends_with('\n') {
        output.pop();
    }
    output
}

pub fn format_check_json(summary: &CheckSummary) -> serde_json::Value {
    let changes: Vec<serde_json::Value> = summary
        .diff
        .changes()
        .map(|(path, kind)| json!({ "path": path, "kind": kind }))
        .collect();

    json!({
        "command": "check",
        "root": summary.root.display().to_string(),
        "algorithm": summary.algorithm,
        "clean": summary.diff.is_clean(),
        "added": summary.diff.added,
        "removed": summary.diff.removed,
        "changed": summary.diff.changed,
        "unchanged": summary.diff.unchanged,
        "changes": changes,
        "baseline_files": summary.baseline_files,
        "current_files": summary.current_files,
        "failures": summary.failures,
        "checked_at": chrono::Utc::now().to_rfc3339(),
    })
}
