//! Integration tests for the CLI route table

use hashwatch::cli::{Commands, OutputFormat, RunContext};
use hashwatch::config::MonitorConfig;
use hashwatch::IntegrityError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::integration::{key, write_tree};

fn context(state: &Path, algorithm: &str, format: OutputFormat) -> RunContext {
    let config = MonitorConfig {
        baseline_path: state.join("file_hashes.json"),
        algorithm: algorithm.to_string(),
        ..MonitorConfig::default()
    };
    RunContext::new(config, format)
}

fn init(directory: &Path) -> Commands {
    Commands::Init {
        directory: directory.to_path_buf(),
    }
}

fn check(directory: &Path) -> Commands {
    Commands::Check {
        directory: directory.to_path_buf(),
    }
}

#[test]
fn test_init_then_clean_check() {
    let state = TempDir::new().unwrap();
    let tree = TempDir::new().unwrap();
    write_tree(tree.path(), &[("a.txt", "a"), ("b/c.txt", "c")]);

    let ctx = context(state.path(), "sha256", OutputFormat::Text);

    let output = ctx.execute(&init(tree.path())).unwrap();
    assert!(output.report.ends_with("Initialization complete. Hash database saved."));
    assert!(output.warnings.is_empty());
    assert!(state.path().join("file_hashes.json").exists());

    let output = ctx.execute(&check(tree.path())).unwrap();
    assert!(output
        .report
        .ends_with("No file changes detected. All files are intact."));
}

#[test]
fn test_check_text_lists_changes() {
    let state = TempDir::new().unwrap();
    let tree = TempDir::new().unwrap();
    write_tree(tree.path(), &[("a.txt", "a"), ("b.txt", "b")]);

    let ctx = context(state.path(), "sha256", OutputFormat::Text);
    ctx.execute(&init(tree.path())).unwrap();

    fs::remove_file(tree.path().join("a.txt")).unwrap();
    fs::write(tree.path().join("b.txt"), "changed").unwrap();
    fs::write(tree.path().join("c.txt"), "new").unwrap();

    let report = ctx.execute(&check(tree.path())).unwrap().report;
    assert!(report.contains(&format!("Added files:\n  + {}", key(tree.path(), "c.txt"))));
    assert!(report.contains(&format!("Removed files:\n  - {}", key(tree.path(), "a.txt"))));
    assert!(report.contains(&format!("Modified files:\n  * {}", key(tree.path(), "b.txt"))));
}

#[test]
fn test_check_json_report() {
    let state = TempDir::new().unwrap();
    let tree = TempDir::new().unwrap();
    write_tree(tree.path(), &[("a.txt", "a")]);

    let ctx = context(state.path(), "blake3", OutputFormat::Json);
    ctx.execute(&init(tree.path())).unwrap();
    fs::write(tree.path().join("a.txt"), "edited").unwrap();

    let report = ctx.execute(&check(tree.path())).unwrap().report;
    let value: serde_json::Value = serde_json::from_str(&report).unwrap();

    assert_eq!(value["command"], "check");
    assert_eq!(value["algorithm"], "blake3");
    assert_eq!(value["clean"], false);
    assert_eq!(value["changed"][0], key(tree.path(), "a.txt"));
    assert_eq!(value["added"].as_array().unwrap().len(), 0);
}

#[test]
fn test_check_before_init_reports_all_added() {
    let state = TempDir::new().unwrap();
    let tree = TempDir::new().unwrap();
    write_tree(tree.path(), &[("a.txt", "a"), ("b.txt", "b")]);

    let ctx = context(state.path(), "sha256", OutputFormat::Json);
    let report = ctx.execute(&check(tree.path())).unwrap().report;
    let value: serde_json::Value = serde_json::from_str(&report).unwrap();

    assert_eq!(value["added"].as_array().unwrap().len(), 2);
    assert_eq!(value["baseline_files"], 0);
}

#[test]
fn test_baseline_inside_tree_is_not_reported() {
    let tree = TempDir::new().unwrap();
    write_tree(tree.path(), &[("a.txt", "a")]);

    // Baseline stored inside the monitored directory.
    let ctx = context(tree.path(), "sha256", OutputFormat::Text);
    ctx.execute(&init(tree.path())).unwrap();

    let report = ctx.execute(&check(tree.path())).unwrap().report;
    assert!(report.ends_with("No file changes detected. All files are intact."));
}

#[test]
fn test_malformed_baseline_fails_check() {
    let state = TempDir::new().unwrap();
    let tree = TempDir::new().unwrap();
    write_tree(tree.path(), &[("a.txt", "a")]);
    fs::write(state.path().join("file_hashes.json"), "definitely not json").unwrap();

    let ctx = context(state.path(), "sha256", OutputFormat::Text);
    let err = ctx.execute(&check(tree.path())).unwrap_err();
    assert!(matches!(err, IntegrityError::MalformedBaseline { .. }));
    assert_eq!(hashwatch::cli::exit_code(&err), 1);
}

#[test]
fn test_unsupported_algorithm_fails_before_writing() {
    let state = TempDir::new().unwrap();
    let tree = TempDir::new().unwrap();
    write_tree(tree.path(), &[("a.txt", "a")]);

    let ctx = context(state.path(), "md5", OutputFormat::Text);
    let err = ctx.execute(&init(tree.path())).unwrap_err();

    assert!(matches!(err, IntegrityError::UnsupportedAlgorithm(_)));
    assert!(!state.path().join("file_hashes.json").exists());
}

#[test]
fn test_missing_directory_fails() {
    let state = TempDir::new().unwrap();
    let ctx = context(state.path(), "sha256", OutputFormat::Text);

    let err = ctx
        .execute(&init(&state.path().join("does-not-exist")))
        .unwrap_err();
    assert!(matches!(err, IntegrityError::Io { .. }));
    assert!(!state.path().join("file_hashes.json").exists());
}

#[test]
fn test_algorithms_listing() {
    let state = TempDir::new().unwrap();
    let ctx = context(state.path(), "sha256", OutputFormat::Text);
    let report = ctx.execute(&Commands::Algorithms).unwrap().report;
    for name in hashwatch::HashAlgorithm::names() {
        assert!(report.contains(name));
    }
}
