use crate::domain::CachePolicy;
use crate::ports::{CatalogSource, CatalogStore, ReviewSummaryRetriever};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: CatalogSource, C: CatalogStore, R: ReviewSummaryRetriever> {
    source: S,
    store: C,
    reviews: R,
    cache_policy: CachePolicy,
}

impl<S: CatalogSource, C: CatalogStore, R: ReviewSummaryRetriever> AppContext<S, C, R> {
    /// Create a new application context with a never-expiring cache.
    pub fn new(source: S, store: C, reviews: R) -> Self {
        Self { source, store, reviews, cache_policy: CachePolicy::default() }
    }

    pub fn with_cache_policy(self, cache_policy: CachePolicy) -> Self {
        Self { cache_policy, ..self }
    }

    /// Get a reference to the app list source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a reference to the snapshot store.
    pub fn store(&self) -> &C {
        &self.store
    }

    /// Get a reference to the review summary retriever.
    pub fn reviews(&self) -> &R {
        &self.reviews
    }

    pub fn cache_policy(&self) -> CachePolicy {
        self.cache_policy
    }
}
