use thiserror::Error;

#[derive(Error, Debug)]
pub enum BurnError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Document expired: {0}")]
    Expired(String),

    #[error("Could not allocate a free identifier after {attempts} attempts")]
    IdCollision { attempts: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

/// Message shown to end users for both missing and expired documents.
pub const UNAVAILABLE_MESSAGE: &str = "Document does not exist or has been destroyed.";

impl BurnError {
    /// True when the document can't be served: never existed, already
    /// retired, or expired just now. Callers outside the crate should not
    /// tell these apart.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, BurnError::NotFound(_) | BurnError::Expired(_))
    }
}

pub type Result<T> = std::result::Result<T, BurnError>;
