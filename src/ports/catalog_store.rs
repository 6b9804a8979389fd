//! Persisted app list snapshot port definition.

use std::time::Duration;

use crate::domain::AppError;

/// Port for the single well-known snapshot location.
pub trait CatalogStore {
    /// Whether a snapshot is present.
    fn exists(&self) -> bool;

    /// Read the raw snapshot bytes.
    fn read(&self) -> Result<Vec<u8>, AppError>;

    /// Replace the snapshot with `bytes`.
    fn write(&self, bytes: &[u8]) -> Result<(), AppError>;

    /// Time since the snapshot was last written, if known.
    fn age(&self) -> Option<Duration>;

    /// Human-readable location for logs and error messages.
    fn location(&self) -> String;
}
