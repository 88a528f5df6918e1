//! Document identifiers.
//!
//! Identifiers are short opaque strings handed out on create and used as store
//! keys. [`RandomIds`] draws them from the lowercase base-36 alphabet; with the
//! minimum length of 10 that is roughly 3.6·10^15 combinations, and the default
//! of 12 gives 4.7·10^18. Randomness alone doesn't guarantee uniqueness, so the
//! lifecycle engine also checks for live records before using a fresh id.
//!
//! [`DocId::parse`] validates identifiers coming from outside (CLI arguments,
//! URLs). Accepted ids only contain `[A-Za-z0-9_-]`, which also makes them safe
//! to embed in file names.

use crate::error::{BurnError, Result};
use rand::Rng;
use std::fmt;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub const DEFAULT_ID_LENGTH: usize = 12;
pub const MIN_ID_LENGTH: usize = 10;
pub const MAX_ID_LENGTH: usize = 64;

/// Only constructed through [`DocId::parse`] or a generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocId(String);

impl DocId {
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() || raw.len() > MAX_ID_LENGTH {
            return Err(BurnError::Validation(format!(
                "identifier must be 1 to {} characters",
                MAX_ID_LENGTH
            )));
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(BurnError::Validation(format!(
                "identifier contains invalid characters: {}",
                raw
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DocId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Source of fresh identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> DocId;
}

/// Random base-36 identifiers from the thread-local RNG.
#[derive(Debug, Clone)]
pub struct RandomIds {
    length: usize,
}

impl RandomIds {
    pub fn new(length: usize) -> Result<Self> {
        if !(MIN_ID_LENGTH..=MAX_ID_LENGTH).contains(&length) {
            return Err(BurnError::Validation(format!(
                "identifier length must be between {} and {}",
                MIN_ID_LENGTH, MAX_ID_LENGTH
            )));
        }
        Ok(Self { length })
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self {
            length: DEFAULT_ID_LENGTH,
        }
    }
}

impl IdGenerator for RandomIds {
    fn generate(&self) -> DocId {
        let mut rng = rand::thread_rng();
        let id: String = (0..self.length)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        DocId(id)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use std::sync::Mutex;

    /// Hands out a fixed sequence of ids, then repeats the last one.
    pub struct ScriptedIds {
        ids: Mutex<Vec<String>>,
        last: Mutex<Option<String>>,
    }

    impl ScriptedIds {
        pub fn new<I, T>(ids: I) -> Self
        where
            I: IntoIterator<Item = T>,
            T: Into<String>,
        {
            let mut ids: Vec<String> = ids.into_iter().map(Into::into).collect();
            ids.reverse();
            Self {
                ids: Mutex::new(ids),
                last: Mutex::new(None),
            }
        }
    }

    impl IdGenerator for ScriptedIds {
        fn generate(&self) -> DocId {
            let mut ids = self.ids.lock().unwrap();
            let mut last = self.last.lock().unwrap();
            if let Some(next) = ids.pop() {
                *last = Some(next);
            }
            DocId(last.clone().unwrap_or_else(|| "scripted00".to_string()))
        }
    }
}
