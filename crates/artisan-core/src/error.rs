//! Configuration error types.

use thiserror::Error;

/// Errors raised when a configuration fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A duration that must be positive was zero.
    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),

    /// The maximum quantity is below the minimum of one.
    #[error("cart.max_quantity must be at least 1, got {0}")]
    InvalidMaxQuantity(u32),

    /// The storage key is empty.
    #[error("cart.storage_key must not be empty")]
    EmptyStorageKey,
}
