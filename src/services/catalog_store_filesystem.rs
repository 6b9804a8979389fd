use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::domain::AppError;
use crate::ports::CatalogStore;

/// Snapshot store backed by a single file.
#[derive(Debug, Clone)]
pub struct FilesystemCatalogStore {
    path: PathBuf,
}

impl FilesystemCatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for FilesystemCatalogStore {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn read(&self) -> Result<Vec<u8>, AppError> {
        fs::read(&self.path).map_err(AppError::from)
    }

    fn write(&self, bytes: &[u8]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(AppError::from)?;
        }
        fs::write(&self.path, bytes).map_err(AppError::from)
    }

    fn age(&self) -> Option<Duration> {
        let modified = fs::metadata(&self.path).and_then(|m| m.modified()).ok()?;
        // A clock skewed into the future reads as a fresh snapshot.
        Some(SystemTime::now().duration_since(modified).unwrap_or_default())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
