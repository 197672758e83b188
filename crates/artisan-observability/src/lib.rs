//! Logging for the Artisan storefront.
//!
//! Library crates emit `tracing` events; this crate installs the
//! subscriber that formats them, configured from `LoggingConfig`.

mod logging;

pub use logging::*;
