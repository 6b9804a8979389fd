pub mod catalog;
pub mod configuration;
pub mod error;
pub mod review_summary;

pub use catalog::{AppId, Catalog, CatalogEntry};
pub use configuration::{CacheConfig, CachePolicy, SteamApiConfig, SteamInfoConfig};
pub use error::AppError;
pub use review_summary::{Author, QuerySummary, Review, ReviewSummary};
