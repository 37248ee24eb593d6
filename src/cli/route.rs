//! CLI route: single route table and run context. Dispatches to the monitor and presentation.

use crate::config::{ConfigLoader, MonitorConfig};
use crate::error::IntegrityError;
use crate::monitor::Monitor;
use std::path::Path;
use tracing::{debug, info};

use crate::cli::parse::{Cli, Commands, OutputFormat};
use crate::cli::presentation::{
    format_algorithms_text, format_check_json, format_check_text, format_failure,
    format_init_json, format_init_text,
};
use crate::cli::command_name;

/// What a command produced: the report for stdout and per-file warnings for stderr.
#[derive(Debug, Clone, Default)]
pub struct RunOutput {
    pub report: String,
    pub warnings: Vec<String>,
}

/// Load configuration for a CLI invocation and fold in the CLI overrides.
///
/// `--config` replaces the user and workspace files; otherwise the current
/// directory is the workspace.
pub fn load_config(cli: &Cli) -> Result<MonitorConfig, IntegrityError> {
    let mut config = if let Some(ref config_path) = cli.config {
        ConfigLoader::load_from_file(config_path)?
    } else {
        let workspace_root =
            std::env::current_dir().map_err(|e| IntegrityError::io(Path::new("."), e))?;
        ConfigLoader::load(&workspace_root)?
    };

    if let Some(ref algorithm) = cli.algorithm {
        config.algorithm = algorithm.clone();
    }
    if let Some(ref baseline) = cli.baseline {
        config.baseline_path = baseline.clone();
    }

    Ok(config)
}

/// Runtime context for CLI execution: resolved configuration and output format.
pub struct RunContext {
    config: MonitorConfig,
    format: OutputFormat,
}

impl RunContext {
    pub fn new(config: MonitorConfig, format: OutputFormat) -> Self {
        Self { config, format }
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<RunOutput, IntegrityError> {
        debug!(command = command_name(command), "Dispatching command");
        let output = match command {
            Commands::Init { directory } => self.handle_init(directory)?,
            Commands::Check { directory } => self.handle_check(directory)?,
            Commands::Algorithms => RunOutput {
                report: format_algorithms_text(),
                warnings: Vec::new(),
            },
        };
        info!(command = command_name(command), "Command finished");
        Ok(output)
    }

    fn handle_init(&self, directory: &Path) -> Result<RunOutput, IntegrityError> {
        let monitor = Monitor::from_config(&self.config)?;
        let summary = monitor.initialize(directory)?;

        let report = match self.format {
            OutputFormat::Text => format_init_text(&summary),
            OutputFormat::Json => to_pretty_json(&format_init_json(&summary))?,
        };
        Ok(RunOutput {
            report,
            warnings: summary.failures.iter().map(format_failure).collect(),
        })
    }

    fn handle_check(&self, directory: &Path) -> Result<RunOutput, IntegrityError> {
        let monitor = Monitor::from_config(&self.config)?;
        let summary = monitor.check(directory)?;

        let report = match self.format {
            OutputFormat::Text => format_check_text(&summary),
            OutputFormat::Json => to_pretty_json(&format_check_json(&summary))?,
        };
        Ok(RunOutput {
            report,
            warnings: summary.failures.iter().map(format_failure).collect(),
        })
    }
}

fn to_pretty_json(value: &serde_json::Value) -> Result<String, IntegrityError> {
    serde_json::to_string_pretty(value).map_err(|e| IntegrityError::Serialization(e.to_string()))
}
