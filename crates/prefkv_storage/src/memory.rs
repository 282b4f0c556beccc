//! In-memory store for testing.

use crate::error::StorageResult;
use crate::store::KeyValueStore;
use crate::value::StoreValue;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// An in-memory key-value store.
///
/// This store keeps all entries in memory and is suitable for:
/// - Unit tests
/// - Integration tests
/// - Ephemeral settings that don't need persistence
///
/// Every test can create its own instance, so tests never share state
/// through a process-wide default store.
///
/// # Thread Safety
///
/// This store is thread-safe and can be shared across threads.
///
/// # Example
///
/// ```rust
/// use prefkv_storage::{InMemoryStore, KeyValueStore, StoreValue};
///
/// let store = InMemoryStore::new();
/// store.set("volume", StoreValue::Integer(7));
/// assert_eq!(store.get("volume"), Some(StoreValue::Integer(7)));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, StoreValue>>,
    flushes: AtomicU64,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory store with pre-existing entries.
    #[must_use]
    pub fn with_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, StoreValue)>,
        K: Into<String>,
    {
        Self {
            entries: RwLock::new(entries.into_iter().map(|(k, v)| (k.into(), v)).collect()),
            flushes: AtomicU64::new(0),
        }
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Returns how many times [`KeyValueStore::flush`] has been called.
    ///
    /// Useful for asserting the write path's durability policy.
    #[must_use]
    pub fn flush_count(&self) -> u64 {
        self.flushes.load(Ordering::Relaxed)
    }

    /// Clears all entries from the store.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Option<StoreValue> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: StoreValue) {
        self.entries.write().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }

    fn entries(&self) -> Vec<(String, StoreValue)> {
        self.entries
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn flush(&self) -> StorageResult<()> {
        // Nothing to persist
        self.flushes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_new_is_empty() {
        let store = InMemoryStore::new();
        assert!(store.is_empty());
        assert!(store.entries().is_empty());
    }

    #[test]
    fn memory_set_and_get() {
        let store = InMemoryStore::new();
        store.set("name", StoreValue::from("alice"));
        assert_eq!(store.get("name"), Some(StoreValue::from("alice")));
        assert!(store.contains_key("name"));
    }

    #[test]
    fn memory_set_overwrites() {
        let store = InMemoryStore::new();
        store.set("count", StoreValue::Integer(1));
        store.set("count", StoreValue::Integer(2));
        assert_eq!(store.get("count"), Some(StoreValue::Integer(2)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn memory_remove() {
        let store = InMemoryStore::new();
        store.set("gone", StoreValue::Bool(true));
        store.remove("gone");
        assert!(store.get("gone").is_none());

        // Removing again is a no-op
        store.remove("gone");
        assert!(store.is_empty());
    }

    #[test]
    fn memory_get_missing() {
        let store = InMemoryStore::new();
        assert!(store.get("missing").is_none());
        assert!(!store.contains_key("missing"));
    }

    #[test]
    fn memory_with_entries() {
        let store = InMemoryStore::with_entries([
            ("a", StoreValue::Integer(1)),
            ("b", StoreValue::Integer(2)),
        ]);
        assert_eq!(store.len(), 2);

        let mut entries = store.entries();
        entries.sort_by(|x, y| x.0.cmp(&y.0));
        assert_eq!(entries[0], ("a".to_string(), StoreValue::Integer(1)));
        assert_eq!(entries[1], ("b".to_string(), StoreValue::Integer(2)));
    }

    #[test]
    fn memory_flush_counts() {
        let store = InMemoryStore::new();
        assert_eq!(store.flush_count(), 0);
        store.flush().unwrap();
        store.flush().unwrap();
        assert_eq!(store.flush_count(), 2);
    }

    #[test]
    fn memory_clear() {
        let store = InMemoryStore::new();
        store.set("x", StoreValue::Integer(1));
        store.clear();
        assert!(store.is_empty());
    }
}
