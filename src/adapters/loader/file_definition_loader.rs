//! Filesystem adapter for conversation definitions

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::ports::{DefinitionLoader, LoaderError};

/// Filesystem-based definition loader
///
/// Locators are file paths. Relative paths are resolved against the
/// optional base directory, otherwise against the working directory.
#[derive(Debug, Clone, Default)]
pub struct FileDefinitionLoader {
    base_dir: Option<PathBuf>,
}

impl FileDefinitionLoader {
    /// Create a loader resolving paths against the working directory
    pub fn new() -> Self {
        Self { base_dir: None }
    }

    /// Create a loader resolving relative paths against `base_dir`
    pub fn with_base_dir(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: Some(base_dir.as_ref().to_path_buf()),
        }
    }

    /// Full path for a locator
    fn resolve_path(&self, locator: &str) -> PathBuf {
        let path = Path::new(locator);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl DefinitionLoader for FileDefinitionLoader {
    fn load(&self, locator: &str) -> Result<String, LoaderError> {
        if locator.is_empty() {
            return Err(LoaderError::NotFound("empty path".to_string()));
        }

        let file_path = self.resolve_path(locator);
        debug!(path = %file_path.display(), "Reading conversation definition");

        fs::read_to_string(&file_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoaderError::NotFound(file_path.display().to_string()),
            ErrorKind::PermissionDenied => {
                LoaderError::PermissionDenied(format!("Cannot read file: {}", e))
            }
            _ => LoaderError::Io(format!("Failed to read file: {}", e)),
        })
    }
}
