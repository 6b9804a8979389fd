//! App list acquisition: load the snapshot if trusted, otherwise fetch, sort, persist.

use crate::app::AppContext;
use crate::domain::catalog::{decode_snapshot, encode_snapshot};
use crate::domain::{AppError, Catalog};
use crate::ports::{CatalogSource, CatalogStore, ReviewSummaryRetriever};

/// Produce a ready-to-query catalog.
///
/// A present, unexpired snapshot is decoded and trusted to be in name order.
/// A snapshot that fails to decode is reported as `CacheReadCorrupt` instead
/// of falling back to the network.
pub fn acquire<S, C, R>(ctx: &AppContext<S, C, R>) -> Result<Catalog, AppError>
where
    S: CatalogSource,
    C: CatalogStore,
    R: ReviewSummaryRetriever,
{
    let store = ctx.store();

    if store.exists() {
        let age = store.age();
        if ctx.cache_policy().is_expired(age) {
            tracing::info!(location = %store.location(), ?age, "Cached app list expired");
        } else {
            let catalog = load(store)?;
            tracing::debug!(
                location = %store.location(),
                entries = catalog.len(),
                "Using cached app list"
            );
            return Ok(catalog);
        }
    } else {
        tracing::debug!(location = %store.location(), "No cached app list");
    }

    fetch_and_persist(ctx)
}

/// Fetch, sort and persist the app list regardless of any existing snapshot.
pub fn refresh<S, C, R>(ctx: &AppContext<S, C, R>) -> Result<Catalog, AppError>
where
    S: CatalogSource,
    C: CatalogStore,
    R: ReviewSummaryRetriever,
{
    fetch_and_persist(ctx)
}

fn load(store: &impl CatalogStore) -> Result<Catalog, AppError> {
    let corrupt = |details: String| AppError::CacheReadCorrupt { path: store.location(), details };

    let bytes = store.read().map_err(|e| corrupt(e.to_string()))?;
    decode_snapshot(&bytes).map_err(|e| corrupt(e.to_string()))
}

fn fetch_and_persist<S, C, R>(ctx: &AppContext<S, C, R>) -> Result<Catalog, AppError>
where
    S: CatalogSource,
    C: CatalogStore,
    R: ReviewSummaryRetriever,
{
    let entries = ctx.source().fetch_entries()?;
    tracing::info!(entries = entries.len(), "Fetched app list");

    let catalog = Catalog::from_unsorted(entries);

    if let Err(err) = persist(ctx.store(), &catalog) {
        tracing::warn!("{}", err);
    }

    Ok(catalog)
}

/// Best-effort snapshot write; failures come back as `CacheWriteFailed`.
fn persist(store: &impl CatalogStore, catalog: &Catalog) -> Result<(), AppError> {
    let failed = |details: String| AppError::CacheWriteFailed { path: store.location(), details };

    let bytes = encode_snapshot(catalog).map_err(|e| failed(e.to_string()))?;
    store.write(&bytes).map_err(|e| failed(e.to_string()))?;
    tracing::debug!(location = %store.location(), bytes = bytes.len(), "Saved app list snapshot");
    Ok(())
}
