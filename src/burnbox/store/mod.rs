//! # Storage Layer
//!
//! This module defines the store adapter for burnbox. The [`DocumentStore`] trait
//! is a plain key-value interface: get, put and delete raw bytes by identifier.
//! Everything about documents (encoding, limits, retirement) lives above it in
//! the lifecycle engine.
//!
//! ## Contract
//!
//! - `get` returns `Ok(None)` for a missing key. Absence is not an error.
//! - `put` replaces any existing value for the key.
//! - `delete` of a missing key is a no-op and returns `Ok(())`.
//! - A single caller must be able to read its own writes for a given key.
//!   No multi-key transactions are required.
//!
//! All methods take `&self` so a store can be shared between threads; the
//! implementations handle their own interior mutability.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one JSON file per document in a directory
//!   ```text
//!   <data dir>/
//!   ├── config.json          # BurnConfig
//!   └── doc-{id}.json        # one encoded DocumentRecord per document
//!   ```
//! - [`memory::MemoryStore`]: a `HashMap` behind an `RwLock`, for tests and
//!   embedding. Does not persist.

use crate::error::Result;
use crate::id::DocId;

pub mod fs;
pub mod memory;

/// Abstract interface for document storage.
pub trait DocumentStore: Send + Sync {
    /// Fetch the raw record stored under `key`.
    fn get(&self, key: &DocId) -> Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing whatever was there.
    fn put(&self, key: &DocId, value: &[u8]) -> Result<()>;

    /// Remove `key`. Missing keys are not an error.
    fn delete(&self, key: &DocId) -> Result<()>;

    fn contains(&self, key: &DocId) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}

impl<S: DocumentStore + ?Sized> DocumentStore for std::sync::Arc<S> {
    fn get(&self, key: &DocId) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn put(&self, key: &DocId, value: &[u8]) -> Result<()> {
        (**self).put(key, value)
    }

    fn delete(&self, key: &DocId) -> Result<()> {
        (**self).delete(key)
    }

    fn contains(&self, key: &DocId) -> Result<bool> {
        (**self).contains(key)
    }
}
