//! Configuration loading from `steaminfo.toml`.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, SteamInfoConfig};

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "steaminfo.toml";

/// Load configuration.
///
/// An explicit `path` must exist. Without one, `steaminfo.toml` in the working
/// directory is used when present and defaults apply otherwise.
pub fn load_config(path: Option<&Path>) -> Result<SteamInfoConfig, AppError> {
    let path = match path {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::ConfigMissing(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if !default.is_file() {
                tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                return Ok(SteamInfoConfig::default());
            }
            default.to_path_buf()
        }
    };

    tracing::debug!(path = %path.display(), "Loading configuration");
    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<SteamInfoConfig, AppError> {
    let config: SteamInfoConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
