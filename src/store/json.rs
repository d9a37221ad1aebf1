//! File-backed record store
//!
//! Persists one pretty-printed JSON file per unit name so cache state
//! stays human-readable and diffable.

use super::RecordStore;
use crate::error::{CacheError, CacheResult};
use crate::record::RunRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File extension for persisted run records
const RECORD_FILE_EXTENSION: &str = ".deps.json";

/// Stores `<name>.deps.json` files under a caller-supplied cache directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    cache_dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given cache directory
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    /// Default per-user cache directory
    pub fn default_cache_dir() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("workcache")
    }

    /// Path of the record file for a unit name
    pub fn record_path(&self, name: &str) -> PathBuf {
        self.cache_dir.join(format!("{name}{RECORD_FILE_EXTENSION}"))
    }

    /// The cache directory this store writes under
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(Self::default_cache_dir())
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self, name: &str) -> CacheResult<Option<RunRecord>> {
        let path = self.record_path(name);

        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| CacheError::io(format!("reading run record {}", path.display()), e))?;

        let record =
            serde_json::from_str(&content).map_err(|e| CacheError::CorruptRecord {
                path: path.clone(),
                source: e,
            })?;

        Ok(Some(record))
    }

    fn save(&self, name: &str, record: &RunRecord) -> CacheResult<()> {
        let path = self.record_path(name);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CacheError::io(format!("creating cache directory {}", parent.display()), e)
            })?;
        }

        let content = serde_json::to_string_pretty(record)?;
        fs::write(&path, content)
            .map_err(|e| CacheError::io(format!("writing run record {}", path.display()), e))?;

        debug!("Stored run record for '{}' at {}", name, path.display());
        Ok(())
    }
}
