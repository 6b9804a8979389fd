//! Wire and on-disk shape of the app list.
//!
//! Steam returns `{"applist":{"apps":[...]}}` and the cache snapshot reuses the
//! same document, written in catalog order.

use serde::{Deserialize, Serialize};

use super::{Catalog, CatalogEntry};

/// Top-level app list document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppListDocument {
    pub applist: AppList,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppList {
    pub apps: Vec<CatalogEntry>,
}

impl AppListDocument {
    pub fn into_entries(self) -> Vec<CatalogEntry> {
        self.applist.apps
    }
}

/// Serialize a catalog into snapshot bytes, preserving its order.
pub fn encode_snapshot(catalog: &Catalog) -> Result<Vec<u8>, serde_json::Error> {
    #[derive(Serialize)]
    struct DocumentRef<'a> {
        applist: AppListRef<'a>,
    }

    #[derive(Serialize)]
    struct AppListRef<'a> {
        apps: &'a [CatalogEntry],
    }

    serde_json::to_vec(&DocumentRef { applist: AppListRef { apps: catalog.entries() } })
}

/// Parse snapshot bytes into a catalog without re-sorting.
pub fn decode_snapshot(bytes: &[u8]) -> Result<Catalog, serde_json::Error> {
    let document: AppListDocument = serde_json::from_slice(bytes)?;
    Ok(Catalog::from_sorted(document.into_entries()))
}
