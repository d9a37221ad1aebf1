//! File content hashing for change detection
//!
//! A digest is a pure function of the file's current bytes. Nothing is
//! memoized; callers re-hash whenever they need a fresh answer.

use crate::error::{CacheError, CacheResult};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Produces a stable digest of a file's current contents
///
/// Implementations must be deterministic and collision-resistant; two
/// files compare equal exactly when their digests do.
pub trait FileHasher {
    /// Hex-encoded digest of the file's bytes
    fn hash_file(&self, path: &Path) -> CacheResult<String>;
}

/// SHA-256 hasher returning the full 64-character hex digest
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Hasher;

impl FileHasher for Sha256Hasher {
    fn hash_file(&self, path: &Path) -> CacheResult<String> {
        let contents = fs::read(path).map_err(|e| CacheError::file_access(path, e))?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        Ok(hex::encode(hasher.finalize()))
    }
}
