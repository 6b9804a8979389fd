mod catalog_source;
mod catalog_store;
mod review_summary_retriever;

pub use catalog_source::CatalogSource;
pub use catalog_store::CatalogStore;
pub use review_summary_retriever::ReviewSummaryRetriever;
