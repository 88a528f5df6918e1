//! # Lifecycle Engine
//!
//! The document lifecycle and consumption accounting. A document is created
//! once, may have its view count decremented by reads, and is destroyed by
//! running out of views, by a read that finds it expired, or by an explicit
//! delete. There is no update of content.
//!
//! ```text
//!   Absent ──create──▶ Live ──read (views left, not expired)──▶ Live
//!                       │
//!                       ├──read (last view / expired)──▶ Retired ──delete──▶ Absent
//!                       └──delete──────────────────────────────────────────▶ Absent
//! ```
//!
//! The engine keeps no document state of its own: every call goes to the
//! injected [`DocumentStore`]. The only read-then-write sequences are in
//! [`Lifecycle::create`] (existence check, then put) and `consume` (fetch,
//! then decrement or delete); both run under the [`KeyGuard`] for the
//! identifier.
//!
//! ## Read order
//!
//! 1. Missing record: `NotFound`.
//! 2. Expired record: delete it (best effort), `Expired`.
//! 3. Limited views: decrement. At zero the record is deleted before the
//!    content is returned, so only the current caller sees it.
//! 4. Remaining time is clamped at zero.

use crate::clock::{Clock, SystemClock};
use crate::error::{BurnError, Result};
use crate::guard::{Consistency, KeyGuard};
use crate::id::{DocId, IdGenerator, RandomIds};
use crate::model::{DocumentRecord, DocumentView, Limits};
use crate::store::DocumentStore;
use tracing::{debug, info, warn};

pub const DEFAULT_ID_ATTEMPTS: u32 = 5;
/// 25 MiB, the per-value limit of common hosted KV stores.
pub const DEFAULT_MAX_CONTENT_BYTES: usize = 25 * 1024 * 1024;

/// Tunables for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Fresh identifiers tried on create before giving up.
    pub id_attempts: u32,
    pub max_content_bytes: usize,
    pub consistency: Consistency,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            id_attempts: DEFAULT_ID_ATTEMPTS,
            max_content_bytes: DEFAULT_MAX_CONTENT_BYTES,
            consistency: Consistency::default(),
        }
    }
}

pub struct Lifecycle<S: DocumentStore> {
    store: S,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
    guard: KeyGuard,
    settings: Settings,
}

impl<S: DocumentStore> Lifecycle<S> {
    pub fn new(store: S) -> Self {
        let settings = Settings::default();
        Self {
            store,
            clock: Box::new(SystemClock),
            ids: Box::new(RandomIds::default()),
            guard: KeyGuard::new(settings.consistency),
            settings,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        if settings.consistency != self.guard.mode() {
            self.guard = KeyGuard::new(settings.consistency);
        }
        self.settings = settings;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Store `content` under a fresh identifier.
    ///
    /// Validation happens before anything touches the store. A generated
    /// identifier that already names a record is discarded and another one is
    /// drawn, up to `id_attempts` times.
    pub fn create(&self, content: String, limits: Limits) -> Result<DocId> {
        if content.is_empty() {
            return Err(BurnError::Validation("content must not be empty".to_string()));
        }
        if content.len() > self.settings.max_content_bytes {
            return Err(BurnError::Validation(format!(
                "content is {} bytes, the limit is {}",
                content.len(),
                self.settings.max_content_bytes
            )));
        }

        let record = DocumentRecord::new(content, &limits, self.clock.now_ms());
        let bytes = record.encode()?;

        for _ in 0..self.settings.id_attempts {
            let id = self.ids.generate();
            let _held = self.guard.lock(id.as_str());
            if self.store.contains(&id)? {
                debug!(id = %id, "generated identifier is taken, drawing another");
                continue;
            }
            self.store.put(&id, &bytes)?;
            debug!(
                id = %id,
                remaining_views = ?record.remaining_views,
                expires_at = ?record.expires_at,
                "document created"
            );
            return Ok(id);
        }

        Err(BurnError::IdCollision {
            attempts: self.settings.id_attempts,
        })
    }

    /// Read a document, counting one view against its limit.
    pub fn read(&self, id: &DocId) -> Result<DocumentView> {
        self.consume(id)
    }

    /// Remove a document. Deleting something that isn't there succeeds.
    pub fn delete(&self, id: &DocId) -> Result<()> {
        let _held = self.guard.lock(id.as_str());
        self.store.delete(id)?;
        debug!(id = %id, "document deleted");
        Ok(())
    }

    fn consume(&self, id: &DocId) -> Result<DocumentView> {
        let _held = self.guard.lock(id.as_str());

        let raw = self
            .store
            .get(id)?
            .ok_or_else(|| BurnError::NotFound(id.to_string()))?;
        let mut record = DocumentRecord::decode(&raw)?;
        let now = self.clock.now_ms();

        if record.is_expired(now) {
            // The next access retries the delete, so a failure here only delays cleanup.
            if let Err(e) = self.store.delete(id) {
                warn!(id = %id, error = %e, "failed to delete expired document");
            }
            info!(id = %id, "document retired: expired");
            return Err(BurnError::Expired(id.to_string()));
        }

        if record.consume_view() {
            self.store.delete(id)?;
            info!(id = %id, "document retired: views exhausted");
        } else if record.remaining_views.is_some() {
            self.store.put(id, &record.encode()?)?;
        }

        debug!(id = %id, remaining_views = ?record.remaining_views, "document read");
        Ok(DocumentView {
            remaining_time_ms: record.remaining_time_ms(now),
            remaining_views: record.remaining_views,
            content: record.content,
        })
    }
}
