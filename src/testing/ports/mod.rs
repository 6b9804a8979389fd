mod fake_catalog_source;
mod fake_review_retriever;
mod memory_catalog_store;

pub use fake_catalog_source::FakeCatalogSource;
pub use fake_review_retriever::FakeReviewRetriever;
pub use memory_catalog_store::MemoryCatalogStore;
