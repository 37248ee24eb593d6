//! CLI parse: clap types for hashwatch. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// hashwatch CLI - Monitor file changes by hash comparison
#[derive(Parser)]
#[command(name = "hashwatch")]
#[command(about = "Monitor file changes by hash comparison")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Hash algorithm to use (sha224, sha256, sha384, sha512, blake3)
    #[arg(long, global = true)]
    pub algorithm: Option<String>,

    /// Baseline file (default: file_hashes.json)
    #[arg(long, global = true)]
    pub baseline: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Scan a directory and save its hashes as the new baseline
    Init {
        /// Directory to monitor
        directory: PathBuf,
    },
    /// Scan a directory and report changes against the baseline
    Check {
        /// Directory to monitor
        directory: PathBuf,
    },
    /// List supported hash algorithms
    Algorithms,
}

/// Report format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
