//! Raw string stores.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::CacheError;

/// A session-scoped string key-value store.
///
/// Mirrors the Web Storage API: values live until the browsing session
/// ends. Methods take `&self` because browser storage is a shared handle.
pub trait SessionStore {
    /// Read the raw value for `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Write the raw value for `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Delete `key`. Deleting a missing key succeeds.
    fn remove_item(&self, key: &str) -> Result<(), CacheError>;
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, CacheError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), CacheError> {
        (**self).remove_item(key)
    }
}

/// In-memory store for tests and server-side rendering.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one raw entry.
    pub fn with_item(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::default();
        store.items.borrow_mut().insert(key.into(), value.into());
        store
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), CacheError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.set_item("k", "v").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));
        assert_eq!(store.len(), 1);

        store.remove_item("k").unwrap();
        assert_eq!(store.get_item("k").unwrap(), None);
    }

    #[test]
    fn test_remove_missing_key() {
        let store = MemoryStore::new();
        assert!(store.remove_item("missing").is_ok());
    }

    #[test]
    fn test_store_by_reference() {
        let store = MemoryStore::with_item("cart", "{}");
        let by_ref: &MemoryStore = &store;
        assert_eq!(by_ref.get_item("cart").unwrap().as_deref(), Some("{}"));
    }
}
