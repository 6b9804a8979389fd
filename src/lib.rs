//! steaminfo: local Steam app list cache and review summary lookup by game title.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{GameSummary, SteamInfo, load_config};
pub use domain::{
    AppError, AppId, CachePolicy, Catalog, CatalogEntry, ReviewSummary, SteamInfoConfig,
};
pub use ports::{CatalogSource, CatalogStore, ReviewSummaryRetriever};
pub use services::{FilesystemCatalogStore, HttpSteamClient};

/// Look up the review summary for `name` using configuration from the working directory.
pub fn summary(name: &str) -> Result<GameSummary, AppError> {
    let config = load_config(None)?;
    SteamInfo::open(&config)?.summary(name)
}
