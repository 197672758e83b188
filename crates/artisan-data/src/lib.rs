//! HTTP cart backend for the Artisan storefront.
//!
//! This crate provides:
//! - `FetchClient` - `CartBackend` over the storefront's REST-ish endpoints
//! - `TimeoutConfig` - Connect/total timeouts derived from config
//! - `endpoints` - URL and form-body builders for each endpoint
//!
//! No request is ever retried: a failure is reported to the caller and
//! dropped.

mod client;
pub mod endpoints;
mod timeout;

pub use client::*;
pub use timeout::*;
