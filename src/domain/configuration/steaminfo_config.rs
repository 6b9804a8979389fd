//! Configuration models loaded from `steaminfo.toml`.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use super::CachePolicy;
use crate::domain::AppError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SteamInfoConfig {
    /// App list snapshot settings.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Steam endpoints and HTTP settings.
    #[serde(default)]
    pub steam: SteamApiConfig,
}

impl SteamInfoConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.cache.validate()?;
        self.steam.validate()?;
        Ok(())
    }
}

/// Snapshot location and expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// Snapshot file path.
    #[serde(default = "default_cache_path")]
    pub path: PathBuf,
    /// Maximum snapshot age in seconds; absent means never expire.
    #[serde(default)]
    pub ttl_secs: Option<u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { path: default_cache_path(), ttl_secs: None }
    }
}

impl CacheConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.path.as_os_str().is_empty() {
            return Err(AppError::config_error("cache.path must not be empty"));
        }
        if self.ttl_secs == Some(0) {
            return Err(AppError::config_error("cache.ttl_secs must be greater than 0"));
        }
        Ok(())
    }

    pub fn policy(&self) -> CachePolicy {
        match self.ttl_secs {
            Some(secs) => CachePolicy::Ttl(Duration::from_secs(secs)),
            None => CachePolicy::NeverExpire,
        }
    }
}

fn default_cache_path() -> PathBuf {
    PathBuf::from("response.json")
}

/// Steam Web API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SteamApiConfig {
    /// Full app list endpoint.
    #[serde(default = "default_app_list_url")]
    pub app_list_url: Url,
    /// Base of the reviews endpoint; the app id is appended.
    #[serde(default = "default_reviews_url")]
    pub reviews_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for SteamApiConfig {
    fn default() -> Self {
        Self {
            app_list_url: default_app_list_url(),
            reviews_url: default_reviews_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl SteamApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("steam.timeout_secs must be greater than 0"));
        }
        if !self.reviews_url.path().ends_with('/') {
            return Err(AppError::config_error(format!(
                "steam.reviews_url must end with '/': {}",
                self.reviews_url
            )));
        }
        Ok(())
    }
}

fn default_app_list_url() -> Url {
    Url::parse("https://api.steampowered.com/ISteamApps/GetAppList/v2/")
        .expect("Default app list URL must be valid")
}

fn default_reviews_url() -> Url {
    Url::parse("https://store.steampowered.com/appreviews/")
        .expect("Default reviews URL must be valid")
}

fn default_timeout() -> u64 {
    30
}
