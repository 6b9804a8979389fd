//! In-memory app catalog ordered by name.

mod snapshot;
mod sort;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

pub use snapshot::{AppList, AppListDocument, decode_snapshot, encode_snapshot};
pub use sort::sort_by_name;

/// Steam application identifier.
pub type AppId = u32;

/// One row of the app list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "appid")]
    pub app_id: AppId,
    pub name: String,
}

impl CatalogEntry {
    pub fn new(app_id: AppId, name: impl Into<String>) -> Self {
        Self { app_id, name: name.into() }
    }
}

/// App list sorted ascending by name, read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Sort `entries` by name and take ownership of the result.
    pub fn from_unsorted(mut entries: Vec<CatalogEntry>) -> Self {
        sort_by_name(&mut entries);
        Self { entries }
    }

    /// Wrap entries already in name order. Order is not checked.
    pub fn from_sorted(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every adjacent pair is in non-decreasing name order.
    pub fn is_sorted(&self) -> bool {
        self.entries.windows(2).all(|pair| pair[0].name <= pair[1].name)
    }

    /// Resolve an exact, case-sensitive name to its app id by binary search.
    ///
    /// Bounds are inclusive and the probe is `low + (high - low) / 2`. When
    /// several entries share `name`, the first one probed wins. Results are
    /// meaningless if the catalog is not sorted.
    pub fn lookup(&self, name: &str) -> Result<AppId, AppError> {
        let not_found = || AppError::GameNotFound(name.to_string());
        let mut low = 0usize;
        let mut high = self.entries.len().checked_sub(1).ok_or_else(not_found)?;

        while low <= high {
            let mid = low + (high - low) / 2;
            let entry = &self.entries[mid];
            match entry.name.as_str().cmp(name) {
                std::cmp::Ordering::Equal => return Ok(entry.app_id),
                std::cmp::Ordering::Less => low = mid + 1,
                std::cmp::Ordering::Greater => match mid.checked_sub(1) {
                    Some(below) => high = below,
                    None => break,
                },
            }
        }

        Err(not_found())
    }
}
