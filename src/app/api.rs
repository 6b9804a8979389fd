//! API Facade for the application.
//!
//! `SteamInfo` glues context creation to the catalog and summary commands and
//! holds the catalog for its own lifetime, acquiring it at most once.

use std::cell::OnceCell;
use std::path::Path;

use crate::app::{
    AppContext,
    commands::{catalog, summary},
};
use crate::domain::{AppError, AppId, Catalog, SteamInfoConfig};
use crate::ports::{CatalogSource, CatalogStore, ReviewSummaryRetriever};
use crate::services::{FilesystemCatalogStore, HttpSteamClient};

pub use crate::app::commands::summary::GameSummary;

/// Load configuration from `path`, or from `steaminfo.toml` / defaults.
pub fn load_config(path: Option<&Path>) -> Result<SteamInfoConfig, AppError> {
    crate::app::config::load_config(path)
}

/// Catalog-backed game lookups over a set of collaborators.
pub struct SteamInfo<S, C, R>
where
    S: CatalogSource,
    C: CatalogStore,
    R: ReviewSummaryRetriever,
{
    ctx: AppContext<S, C, R>,
    catalog: OnceCell<Catalog>,
}

impl SteamInfo<HttpSteamClient, FilesystemCatalogStore, HttpSteamClient> {
    /// Build an instance talking to Steam and caching at `config.cache.path`.
    pub fn open(config: &SteamInfoConfig) -> Result<Self, AppError> {
        let client = HttpSteamClient::new(&config.steam)?;
        let store = FilesystemCatalogStore::new(&config.cache.path);
        let ctx = AppContext::new(client.clone(), store, client)
            .with_cache_policy(config.cache.policy());
        Ok(Self::with_context(ctx))
    }
}

impl<S, C, R> SteamInfo<S, C, R>
where
    S: CatalogSource,
    C: CatalogStore,
    R: ReviewSummaryRetriever,
{
    pub fn with_context(ctx: AppContext<S, C, R>) -> Self {
        Self { ctx, catalog: OnceCell::new() }
    }

    /// The catalog, loading or fetching it on first use.
    pub fn catalog(&self) -> Result<&Catalog, AppError> {
        if let Some(catalog) = self.catalog.get() {
            return Ok(catalog);
        }
        let acquired = catalog::acquire(&self.ctx)?;
        Ok(self.catalog.get_or_init(|| acquired))
    }

    /// Resolve an exact game name to its app id.
    pub fn lookup(&self, name: &str) -> Result<AppId, AppError> {
        self.catalog()?.lookup(name)
    }

    /// Resolve `name` and fetch its review summary.
    pub fn summary(&self, name: &str) -> Result<GameSummary, AppError> {
        let catalog = self.catalog()?;
        summary::execute(&self.ctx, catalog, name)
    }

    /// Refetch the app list, overwrite the snapshot, and replace the held catalog.
    pub fn refresh(&mut self) -> Result<&Catalog, AppError> {
        let fresh = catalog::refresh(&self.ctx)?;
        self.catalog = OnceCell::new();
        Ok(self.catalog.get_or_init(|| fresh))
    }
}
