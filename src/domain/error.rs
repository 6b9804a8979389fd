use std::io;

use thiserror::Error;

/// Library-wide error type for steaminfo operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The remote app list could not be fetched or decoded.
    #[error("App list unavailable: {0}")]
    SourceUnavailable(String),

    /// A cached snapshot exists but could not be read back.
    #[error("Cached app list at {path} is unreadable: {details}")]
    CacheReadCorrupt { path: String, details: String },

    /// Writing the snapshot after a fresh fetch failed.
    #[error("Failed to write app list cache to {path}: {details}")]
    CacheWriteFailed { path: String, details: String },

    /// No catalog entry carries exactly this name.
    #[error("Game '{0}' not found in app list")]
    GameNotFound(String),

    /// The review summary request failed or its response did not decode.
    #[error("Review summary unavailable: {0}")]
    SummaryUnavailable(String),

    /// Configuration value rejected by validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }

    /// Whether the error is an expected lookup miss rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::GameNotFound(_))
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        if self.is_not_found() { 2 } else { 1 }
    }
}
