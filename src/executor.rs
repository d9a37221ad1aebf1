//! Cache-gated execution
//!
//! Decides whether a unit of work must run by comparing its recorded
//! file hashes against the current filesystem state, runs it if so, and
//! snapshots fresh hashes afterwards.

use crate::error::CacheResult;
use crate::hash::{FileHasher, Sha256Hasher};
use crate::record::RunRecord;
use crate::store::{JsonFileStore, RecordStore};
use crate::unit::WorkUnit;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

/// Verdict on whether a unit's cached state is still valid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchDecision {
    /// No previous run recorded for this unit
    NoRecord,
    /// A file from the previous run no longer exists
    FileMissing(PathBuf),
    /// A file's contents differ from the previous run
    FileChanged(PathBuf),
    /// Every recorded file still exists with matching contents
    Match,
}

impl MatchDecision {
    /// Whether the unit's action must be invoked
    pub fn should_run(&self) -> bool {
        !matches!(self, Self::Match)
    }
}

impl fmt::Display for MatchDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRecord => write!(f, "no previous execution info found"),
            Self::FileMissing(path) => write!(f, "file not found: {}", path.display()),
            Self::FileChanged(path) => write!(f, "file has changed: {}", path.display()),
            Self::Match => write!(f, "nothing changed, previous execution info matches"),
        }
    }
}

/// Runs units of work behind a content-hash cache gate
///
/// One unit is evaluated and possibly executed at a time; evaluation,
/// the action, and the record write happen strictly in that order.
pub struct Executor<S = JsonFileStore, H = Sha256Hasher> {
    store: S,
    hasher: H,
}

impl Executor {
    /// Executor backed by `<name>.deps.json` files under `cache_dir`
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonFileStore::new(cache_dir),
            hasher: Sha256Hasher,
        }
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(JsonFileStore::default_cache_dir())
    }
}

impl<S: RecordStore, H: FileHasher> Executor<S, H> {
    /// Executor with a custom store and hasher
    pub fn with_parts(store: S, hasher: H) -> Self {
        Self { store, hasher }
    }

    /// Compare the unit's recorded state to the current filesystem
    ///
    /// Walks the path set of the *previous* run, recorded inputs first,
    /// then recorded outputs, short-circuiting on the first missing or
    /// changed file. Paths the unit newly declares since that run are
    /// not consulted here; only `execute` sees the current declarations.
    pub fn evaluate(&self, unit: &dyn WorkUnit) -> CacheResult<MatchDecision> {
        let record = match self.store.load(unit.name())? {
            Some(record) => record,
            None => return Ok(MatchDecision::NoRecord),
        };

        for (path, recorded_hash) in record.inputs.iter().chain(record.outputs.iter()) {
            let path = Path::new(path);

            if !path.exists() {
                return Ok(MatchDecision::FileMissing(path.to_path_buf()));
            }

            if self.hasher.hash_file(path)? != *recorded_hash {
                return Ok(MatchDecision::FileChanged(path.to_path_buf()));
            }
        }

        Ok(MatchDecision::Match)
    }

    /// Run the unit if its recorded state is stale, then snapshot fresh hashes
    ///
    /// Returns the action's exit code, or 0 when the run was skipped.
    /// The record is rewritten after every run, failing exit codes
    /// included; an action that returns an error aborts before the
    /// record write.
    pub fn execute(&self, unit: &dyn WorkUnit) -> CacheResult<i32> {
        let decision = self.evaluate(unit)?;

        if decision.should_run() {
            info!("Unit '{}' must run: {}", unit.name(), decision);

            let exit_code = unit.run()?;

            let record = RunRecord::capture(&self.hasher, &unit.inputs(), &unit.outputs())?;
            self.store.save(unit.name(), &record)?;

            return Ok(exit_code);
        }

        info!("Unit '{}' skipped: {}", unit.name(), decision);
        Ok(0)
    }
}
