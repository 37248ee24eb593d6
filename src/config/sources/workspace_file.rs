//! Workspace config file source: hashwatch.toml and hashwatch.{env}.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;

/// Name of the workspace configuration file.
pub const WORKSPACE_CONFIG_FILE: &str = "hashwatch.toml";

/// Add workspace config files to builder.
/// Precedence: hashwatch.toml (base) then hashwatch.{HASHWATCH_ENV}.toml when the variable is set.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let mut builder = builder;

    let base_config_path = workspace_root.join(WORKSPACE_CONFIG_FILE);
    if base_config_path.exists() {
        builder = builder.add_source(File::from(base_config_path.as_path()).required(false));
    }

    if let Ok(env_name) = std::env::var("HASHWATCH_ENV") {
        let env_config_path = workspace_root.join(format!("hashwatch.{}.toml", env_name));
        if env_config_path.exists() {
            builder = builder.add_source(File::from(env_config_path.as_path()).required(false));
        }
    }

    Ok(builder)
}
