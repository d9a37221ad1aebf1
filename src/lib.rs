//! Workcache - Content-Addressed Run Cache
//!
//! Skips re-running a unit of work when the files it reads and writes
//! are byte-identical to what they were after its previous run.

pub mod error;
pub mod executor;
pub mod hash;
pub mod record;
pub mod store;
pub mod unit;

pub use error::{CacheError, CacheResult};
pub use executor::{Executor, MatchDecision};
pub use hash::{FileHasher, Sha256Hasher};
pub use record::RunRecord;
pub use store::{JsonFileStore, MemoryStore, RecordStore};
pub use unit::WorkUnit;
