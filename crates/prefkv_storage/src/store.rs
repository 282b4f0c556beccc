//! Key-value store trait definition.

use crate::error::StorageResult;
use crate::value::StoreValue;
use std::sync::Arc;

/// Shared handle to a store.
///
/// Entries hold a handle rather than owning the store, so any number of
/// typed views can point at the same underlying map.
pub type StoreHandle = Arc<dyn KeyValueStore>;

/// A persistent key-value store for prefkv.
///
/// Stores are **untyped maps** from string keys to [`StoreValue`]s. They do
/// not interpret the values; typing and encoding live above this layer.
///
/// # Invariants
///
/// - `get` returns exactly the value passed to the last `set` for that key,
///   or `None` after `remove`
/// - `set` overwrites any previous value (last write wins)
/// - `remove` on a missing key is a no-op
/// - `flush` makes every prior `set`/`remove` durable
/// - Stores must be `Send + Sync` so a handle can be shared across threads
///
/// # Implementors
///
/// - [`super::InMemoryStore`] - For tests and ephemeral state
/// - [`super::FileStore`] - Snapshot file on disk
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<StoreValue>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: StoreValue);

    /// Removes the value stored under `key`.
    fn remove(&self, key: &str);

    /// Returns every stored key-value pair.
    ///
    /// The order is implementation defined and callers must not rely on it.
    fn entries(&self) -> Vec<(String, StoreValue)>;

    /// Forces pending writes to durable storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be persisted.
    fn flush(&self) -> StorageResult<()>;

    /// Returns `true` if a value is stored under `key`.
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Option<StoreValue> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: StoreValue) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }

    fn entries(&self) -> Vec<(String, StoreValue)> {
        (**self).entries()
    }

    fn flush(&self) -> StorageResult<()> {
        (**self).flush()
    }

    fn contains_key(&self, key: &str) -> bool {
        (**self).contains_key(key)
    }
}
