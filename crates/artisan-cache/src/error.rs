//! Cache error types.

use thiserror::Error;

/// Errors that can occur when using the cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Storage is not available (disabled, private mode, no window).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Stored data could not be (de)serialized.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// The underlying store rejected the operation (e.g. quota exceeded).
    #[error("Store operation failed: {0}")]
    StoreError(String),
}
