//! App list source port definition.

use crate::domain::{AppError, CatalogEntry};

/// Port for fetching the complete, unordered app list.
pub trait CatalogSource {
    /// Fetch every known entry. Order is unspecified.
    fn fetch_entries(&self) -> Result<Vec<CatalogEntry>, AppError>;
}
