//! Catalog source double that counts remote calls.

use std::sync::{Arc, Mutex};

use crate::domain::{AppError, CatalogEntry};
use crate::ports::CatalogSource;

#[derive(Clone, Debug, Default)]
pub struct FakeCatalogSource {
    entries: Vec<CatalogEntry>,
    failure: Option<String>,
    pub calls: Arc<Mutex<usize>>,
}

impl FakeCatalogSource {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries, ..Self::default() }
    }

    /// A source whose every fetch fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self { failure: Some(message.into()), ..Self::default() }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl CatalogSource for FakeCatalogSource {
    fn fetch_entries(&self) -> Result<Vec<CatalogEntry>, AppError> {
        *self.calls.lock().unwrap() += 1;
        match &self.failure {
            Some(message) => Err(AppError::SourceUnavailable(message.clone())),
            None => Ok(self.entries.clone()),
        }
    }
}
