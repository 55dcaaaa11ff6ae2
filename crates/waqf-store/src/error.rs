//! Store error types for waqf-store.

use thiserror::Error;
use waqf_core::errors::CoreError;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record could not be encoded to or decoded from JSON.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Trail file I/O failed.
    #[error("Trail I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The storage backend rejected a read or write.
    #[error("Backend error: {0}")]
    Backend(String),

    /// No unused ID could be minted.
    #[error("ID generation failed: {0}")]
    IdGeneration(String),

    /// Invalid state encountered (e.g., unsupported trail version).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Entity-level failure: validation, missing entity.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
