//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("baseline_path", "file_hashes.json")?
        .set_default("algorithm", "sha256")?
        .set_default("scan.follow_symlinks", true)?
        .set_default("scan.exclude_baseline", true)
}
