mod types;

pub use types::*;

use anyhow::{Context, Result};
use clipswap_common::Error;
use std::path::Path;

use crate::logging::LogLevel;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./clipswap.toml", "~/.config/clipswap/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if LogLevel::parse(&config.logging.level).is_none() {
        anyhow::bail!(Error::invalid_config(format!(
            "unknown log level '{}'",
            config.logging.level
        )));
    }

    let suffix = &config.output.suffix;
    if suffix.is_empty() {
        anyhow::bail!(Error::invalid_config(
            "output suffix cannot be empty, the output would overwrite the project"
        ));
    }
    if suffix.contains('/') || suffix.contains('\\') {
        anyhow::bail!(Error::invalid_config(format!(
            "output suffix '{}' cannot contain path separators",
            suffix
        )));
    }

    Ok(())
}
