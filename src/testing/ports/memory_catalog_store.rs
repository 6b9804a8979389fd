//! In-memory snapshot store for exercising the cache manager.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::AppError;
use crate::ports::CatalogStore;

#[derive(Clone, Debug, Default)]
pub struct MemoryCatalogStore {
    pub snapshot: Arc<Mutex<Option<Vec<u8>>>>,
    pub age: Option<Duration>,
    pub fail_writes: bool,
    pub writes: Arc<Mutex<usize>>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing snapshot.
    pub fn with_snapshot(self, bytes: impl Into<Vec<u8>>) -> Self {
        *self.snapshot.lock().unwrap() = Some(bytes.into());
        self
    }

    pub fn with_age(self, age: Duration) -> Self {
        Self { age: Some(age), ..self }
    }

    /// Every write fails as if the disk were read-only.
    pub fn read_only(self) -> Self {
        Self { fail_writes: true, ..self }
    }

    pub fn contents(&self) -> Option<String> {
        self.snapshot.lock().unwrap().as_ref().map(|b| String::from_utf8_lossy(b).into_owned())
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl CatalogStore for MemoryCatalogStore {
    fn exists(&self) -> bool {
        self.snapshot.lock().unwrap().is_some()
    }

    fn read(&self) -> Result<Vec<u8>, AppError> {
        self.snapshot.lock().unwrap().clone().ok_or_else(|| {
            AppError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "no snapshot"))
        })
    }

    fn write(&self, bytes: &[u8]) -> Result<(), AppError> {
        *self.writes.lock().unwrap() += 1;
        if self.fail_writes {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only store",
            )));
        }
        *self.snapshot.lock().unwrap() = Some(bytes.to_vec());
        Ok(())
    }

    fn age(&self) -> Option<Duration> {
        self.age
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
