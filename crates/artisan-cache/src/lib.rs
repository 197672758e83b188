//! Session-scoped storage for the Artisan storefront.
//!
//! Provides a small, typed API over a string key-value store with
//! automatic JSON serialization. The browser build plugs in
//! `window.sessionStorage`; tests and server rendering use `MemoryStore`.
//!
//! # Example
//!
//! ```rust
//! use artisan_cache::{Cache, MemoryStore};
//! use std::collections::BTreeMap;
//!
//! let cache = Cache::new(MemoryStore::new());
//!
//! let mut cart = BTreeMap::new();
//! cart.insert("p1".to_string(), 2u32);
//! cache.set("cart", &cart).unwrap();
//!
//! let restored: Option<BTreeMap<String, u32>> = cache.get("cart").unwrap();
//! assert_eq!(restored, Some(cart));
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{MemoryStore, SessionStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, MemoryStore, SessionStore};
}
