//! Core configuration for the Artisan storefront.
//!
//! This crate provides:
//! - `StorefrontConfig` - Every tunable of the storefront, with defaults
//! - `ConfigError` - Validation failures

mod config;
mod error;

pub use config::*;
pub use error::ConfigError;
