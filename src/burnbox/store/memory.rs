use super::DocumentStore;
use crate::error::{BurnError, Result};
use crate::id::DocId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory storage for tests and embedding.
/// Does NOT persist data.
///
/// Uses an `RwLock` rather than `RefCell` because the lifecycle engine may be
/// shared between threads.
#[derive(Default)]
pub struct MemoryStore {
    docs: RwLock<HashMap<DocId, Vec<u8>>>,
    simulate_write_error: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `put` and `delete` fail, for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(BurnError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }

    // A poisoned map is still a valid map; every write is a single insert/remove.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<DocId, Vec<u8>>> {
        self.docs.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<DocId, Vec<u8>>> {
        self.docs.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl DocumentStore for MemoryStore {
    fn get(&self, key: &DocId) -> Result<Option<Vec<u8>>> {
        Ok(self.read().get(key).cloned())
    }

    fn put(&self, key: &DocId, value: &[u8]) -> Result<()> {
        self.check_writable()?;
        self.write().insert(key.clone(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &DocId) -> Result<()> {
        self.check_writable()?;
        self.write().remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{DocumentRecord, Limits};

    pub struct StoreFixture {
        pub store: MemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: MemoryStore::new(),
            }
        }

        pub fn with_record(self, id: &str, record: &DocumentRecord) -> Self {
            let id = DocId::parse(id).unwrap();
            self.store.put(&id, &record.encode().unwrap()).unwrap();
            self
        }

        pub fn with_document(self, id: &str, content: &str, limits: Limits, now_ms: i64) -> Self {
            let record = DocumentRecord::new(content.to_string(), &limits, now_ms);
            self.with_record(id, &record)
        }

        pub fn with_raw(self, id: &str, raw: &[u8]) -> Self {
            let id = DocId::parse(id).unwrap();
            self.store.put(&id, raw).unwrap();
            self
        }
    }
}
