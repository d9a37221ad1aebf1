//! Persisted run records
//!
//! A run record is the hash snapshot of a unit's declared inputs and
//! outputs taken right after it ran. Records are replaced wholesale on
//! every run; there is no partial update path.

use crate::error::CacheResult;
use crate::hash::FileHasher;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Hash snapshot of a unit's files from its last execution
///
/// Maps each file path to the hex digest of its contents. `BTreeMap`
/// keeps iteration and serialized output in sorted path order, so the
/// persisted JSON stays diffable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Input path to digest at the end of the last run
    pub inputs: BTreeMap<String, String>,

    /// Output path to digest at the end of the last run
    pub outputs: BTreeMap<String, String>,
}

impl RunRecord {
    /// Snapshot fresh hashes of the given input and output paths
    ///
    /// Every path is re-read and re-hashed; digests computed earlier are
    /// never reused. Fails with a file access error if any declared path
    /// cannot be read.
    pub fn capture<H>(hasher: &H, inputs: &[PathBuf], outputs: &[PathBuf]) -> CacheResult<Self>
    where
        H: FileHasher + ?Sized,
    {
        Ok(Self {
            inputs: hash_all(hasher, inputs)?,
            outputs: hash_all(hasher, outputs)?,
        })
    }
}

fn hash_all<H>(hasher: &H, paths: &[PathBuf]) -> CacheResult<BTreeMap<String, String>>
where
    H: FileHasher + ?Sized,
{
    let mut hashes = BTreeMap::new();
    for path in paths {
        hashes.insert(path.display().to_string(), hasher.hash_file(path)?);
    }
    Ok(hashes)
}
