//! Environment variable source: HASHWATCH__* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// `HASHWATCH__ALGORITHM=blake3` sets `algorithm`, `HASHWATCH__SCAN__MAX_DEPTH=3`
/// sets `scan.max_depth`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("HASHWATCH")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
