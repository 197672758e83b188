//! Cart error types.

use artisan_cache::CacheError;
use thiserror::Error;

/// Errors that can occur in cart operations.
#[derive(Error, Debug)]
pub enum CartError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("HTTP {status} from {endpoint}")]
    Status { status: u16, endpoint: String },

    /// The backend answered with a body we could not read.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// Session storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] CacheError),

    /// Quantity is not positive.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity arithmetic overflowed.
    #[error("Quantity overflow for {0}")]
    Overflow(String),

    /// A required form field is missing or empty.
    #[error("Missing field: {0}")]
    MissingField(&'static str),
}

impl CartError {
    /// Whether the error came from talking to the backend.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            CartError::Network(_) | CartError::Status { .. } | CartError::Malformed(_)
        )
    }
}
