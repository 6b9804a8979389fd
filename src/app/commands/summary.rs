//! Name-to-summary resolution.

use crate::app::AppContext;
use crate::domain::{AppError, AppId, Catalog, ReviewSummary};
use crate::ports::{CatalogSource, CatalogStore, ReviewSummaryRetriever};

/// A review summary together with the app id it was resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub name: String,
    pub app_id: AppId,
    pub summary: ReviewSummary,
}

/// Resolve `name` in `catalog` and fetch its review summary.
///
/// A lookup miss returns `GameNotFound` without any remote call. The
/// retriever's result is passed through unchanged.
pub fn execute<S, C, R>(
    ctx: &AppContext<S, C, R>,
    catalog: &Catalog,
    name: &str,
) -> Result<GameSummary, AppError>
where
    S: CatalogSource,
    C: CatalogStore,
    R: ReviewSummaryRetriever,
{
    let app_id = catalog.lookup(name)?;
    tracing::debug!(name, app_id, "Resolved game");

    let summary = ctx.reviews().fetch(app_id)?;
    Ok(GameSummary { name: name.to_string(), app_id, summary })
}
