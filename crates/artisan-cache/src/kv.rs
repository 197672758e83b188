//! Typed cache over a session store.

use serde::{de::DeserializeOwned, Serialize};

use crate::{CacheError, SessionStore};

/// Type-safe cache backed by a `SessionStore`.
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug)]
pub struct Cache<S> {
    store: S,
}

impl<S: SessionStore> Cache<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist, and an error if the stored
    /// text is not valid JSON for `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get_item(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let raw = serde_json::to_string(value)?;
        self.store.set_item(key, &raw)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.remove_item(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.store.get_item(key)?.is_some())
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use std::collections::BTreeMap;

    #[test]
    fn test_set_and_get() {
        let cache = Cache::new(MemoryStore::new());
        let mut value = BTreeMap::new();
        value.insert("p1".to_string(), 3u32);

        cache.set("cart", &value).unwrap();
        let restored: Option<BTreeMap<String, u32>> = cache.get("cart").unwrap();
        assert_eq!(restored, Some(value));
        assert_eq!(cache.store().get_item("cart").unwrap().as_deref(), Some(r#"{"p1":3}"#));
    }

    #[test]
    fn test_missing_key() {
        let cache = Cache::new(MemoryStore::new());
        let value: Option<BTreeMap<String, u32>> = cache.get("cart").unwrap();
        assert!(value.is_none());
        assert!(!cache.exists("cart").unwrap());
    }

    #[test]
    fn test_malformed_value() {
        let cache = Cache::new(MemoryStore::with_item("cart", "{not json"));
        let result: Result<Option<BTreeMap<String, u32>>, _> = cache.get("cart");
        assert!(matches!(result, Err(CacheError::SerializeError(_))));
    }

    #[test]
    fn test_delete() {
        let cache = Cache::new(MemoryStore::new());
        cache.set("cart", &1u32).unwrap();
        assert!(cache.exists("cart").unwrap());

        cache.delete("cart").unwrap();
        assert!(!cache.exists("cart").unwrap());
    }
}
