pub mod ports;

pub use ports::FakeCatalogSource;
pub use ports::FakeReviewRetriever;
pub use ports::MemoryCatalogStore;
