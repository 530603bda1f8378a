//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using a key-value store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the backing medium.
    #[error("failed to open store: {0}")]
    Open(String),

    /// Failed to serialize or deserialize a stored value.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backing medium rejected an operation.
    #[error("store operation failed: {0}")]
    Backend(String),

    /// File I/O against the backing medium failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
