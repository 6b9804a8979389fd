use std::time::Duration;

/// When a persisted app list snapshot stops being trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Use the snapshot until it is deleted.
    #[default]
    NeverExpire,
    /// Refetch once the snapshot is older than the given duration.
    Ttl(Duration),
}

impl CachePolicy {
    /// Whether a snapshot of the given age must be refetched.
    ///
    /// An unknown age never expires the snapshot.
    pub fn is_expired(&self, age: Option<Duration>) -> bool {
        match (self, age) {
            (CachePolicy::NeverExpire, _) => false,
            (CachePolicy::Ttl(_), None) => false,
            (CachePolicy::Ttl(ttl), Some(age)) => age > *ttl,
        }
    }
}
