//! hashwatch CLI Binary
//!
//! Command-line interface for the hashwatch integrity monitor.

use clap::Parser;
use hashwatch::cli::{exit_code, load_config, map_error, Cli, RunContext};
use hashwatch::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(exit_code(&e));
        }
    };

    let logging_config = build_logging_config(&cli, &config.logging);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(exit_code(&e));
    }

    info!("hashwatch starting");

    let context = RunContext::new(config, cli.format);
    match context.execute(&cli.command) {
        Ok(output) => {
            for warning in &output.warnings {
                eprintln!("{}", warning);
            }
            println!("{}", output.report);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(exit_code(&e));
        }
    }
}

/// Build logging configuration from CLI args on top of the config file section
fn build_logging_config(cli: &Cli, configured: &LoggingConfig) -> LoggingConfig {
    if !cli.verbose {
        return LoggingConfig::disabled();
    }

    let mut config = configured.clone();
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = file.clone();
    }
    config
}
