//! Startup configuration: the `--config` file and the stderr log subscriber.

use std::fs;
use std::path::Path;

use chronokv::StoreConfig;
use tracing_subscriber::EnvFilter;

/// Read a TOML store configuration; no path means defaults.
pub fn load_store_config(path: Option<&Path>) -> Result<StoreConfig, String> {
    let Some(path) = path else {
        return Ok(StoreConfig::default());
    };
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
    let config = StoreConfig::from_toml_str(&text)
        .map_err(|e| format!("Invalid config {}: {}", path.display(), e))?;
    tracing::info!(path = %path.display(), ?config, "loaded store config");
    Ok(config)
}

/// Install the fmt subscriber on stderr, filtered by `level`.
pub fn init_logging(level: &str) -> Result<(), String> {
    let filter =
        EnvFilter::try_new(level).map_err(|e| format!("Invalid log level {:?}: {}", level, e))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))
}
