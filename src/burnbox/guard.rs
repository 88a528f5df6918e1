//! Per-identifier serialization for read-modify-write.
//!
//! A read decrements `remainingViews` by fetching the record and writing it
//! back. Two readers racing on the same document could both see the last view
//! and both get the content. [`KeyGuard`] closes that window for callers in the
//! same process: the lifecycle engine runs every fetch-then-write under the
//! guard for that identifier.
//!
//! The guard is striped: identifiers hash onto a fixed set of mutexes, so
//! memory stays bounded and unrelated documents rarely contend.

use crate::error::{BurnError, Result};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard};

const STRIPES: usize = 64;

/// How reads of the same document interact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Consistency {
    /// Read-modify-write per identifier is serialized in-process.
    #[default]
    Serialized,
    /// Unguarded read-decrement-write. Concurrent reads of the last view may
    /// both succeed.
    Relaxed,
}

impl fmt::Display for Consistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Consistency::Serialized => f.write_str("serialized"),
            Consistency::Relaxed => f.write_str("relaxed"),
        }
    }
}

impl FromStr for Consistency {
    type Err = BurnError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "serialized" => Ok(Consistency::Serialized),
            "relaxed" => Ok(Consistency::Relaxed),
            other => Err(BurnError::Validation(format!(
                "consistency must be 'serialized' or 'relaxed', got '{}'",
                other
            ))),
        }
    }
}

pub struct KeyGuard {
    mode: Consistency,
    stripes: Vec<Mutex<()>>,
}

impl KeyGuard {
    pub fn new(mode: Consistency) -> Self {
        let stripes = match mode {
            Consistency::Serialized => (0..STRIPES).map(|_| Mutex::new(())).collect(),
            Consistency::Relaxed => Vec::new(),
        };
        Self { mode, stripes }
    }

    pub fn mode(&self) -> Consistency {
        self.mode
    }

    /// Hold the lock for `key` (if any) while the returned guard lives.
    pub fn lock(&self, key: &str) -> Option<MutexGuard<'_, ()>> {
        if self.stripes.is_empty() {
            return None;
        }
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        let stripe = &self.stripes[(hasher.finish() as usize) % self.stripes.len()];
        // The mutex guards no data, so a poisoned lock is still usable.
        Some(stripe.lock().unwrap_or_else(|e| e.into_inner()))
    }
}
