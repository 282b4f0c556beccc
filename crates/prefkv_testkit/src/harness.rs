//! Model-based test harness.
//!
//! Drives a store through typed entries while tracking the expected
//! contents in a plain map, so a test can assert the two agree at any
//! point.

use prefkv_core::{bulk, KeyValueStore, StoreHandle, StoreValue, TypedEntry};
use std::collections::HashMap;
use std::sync::Arc;

/// A harness that mirrors every write into an expected model.
pub struct ModelHarness {
    /// The store under test.
    pub store: StoreHandle,
    /// Expected contents.
    expected: HashMap<String, StoreValue>,
}

impl ModelHarness {
    /// Creates a harness over a fresh in-memory store.
    pub fn new() -> Self {
        Self::with_store(Arc::new(prefkv_core::InMemoryStore::new()))
    }

    /// Creates a harness over an existing, empty store.
    ///
    /// # Panics
    ///
    /// Panics if the store already holds entries.
    pub fn with_store(store: StoreHandle) -> Self {
        assert!(
            store.entries().is_empty(),
            "ModelHarness requires an empty store"
        );
        Self {
            store,
            expected: HashMap::new(),
        }
    }

    fn entry(&self, key: &str) -> TypedEntry<StoreValue> {
        TypedEntry::new(Arc::clone(&self.store), key)
    }

    /// Stores `value` under `key` and tracks it.
    pub fn set(&mut self, key: &str, value: StoreValue) {
        self.entry(key)
            .set(value.clone())
            .expect("Failed to save value");
        self.expected.insert(key.to_string(), value);
    }

    /// Deletes `key` and stops tracking it.
    pub fn delete(&mut self, key: &str) {
        self.entry(key).delete().expect("Failed to delete value");
        self.expected.remove(key);
    }

    /// Deletes `keys` through the bulk API and updates tracking.
    ///
    /// Asserts the reported removal count matches the model.
    pub fn delete_filtered(&mut self, keys: &[String]) {
        let removed = bulk::delete_all_filtered(&*self.store, keys).expect("Failed to delete");
        let mut expected_removed = 0;
        for key in keys {
            if self.expected.remove(key).is_some() {
                expected_removed += 1;
            }
        }
        assert_eq!(removed, expected_removed, "Removal count mismatch");
    }

    /// Reads `key` and checks it against the model.
    pub fn get_and_verify(&self, key: &str) -> Option<StoreValue> {
        let actual = self.entry(key).value();
        assert_eq!(
            actual.as_ref(),
            self.expected.get(key),
            "Value mismatch for {key:?}"
        );
        actual
    }

    /// Verifies the store holds exactly the tracked entries.
    pub fn verify_all(&self) {
        let actual: HashMap<String, StoreValue> = bulk::all_entries(&*self.store)
            .into_iter()
            .map(|entry| entry.into_parts())
            .collect();
        assert_eq!(actual, self.expected, "Store contents diverged from model");
    }

    /// Returns the count of tracked entries.
    pub fn tracked_count(&self) -> usize {
        self.expected.len()
    }
}

impl Default for ModelHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Behavioral checks any [`KeyValueStore`](prefkv_core::KeyValueStore)
/// implementation must pass.
pub mod store_contract {
    use super::*;

    /// Checks that a value written through a typed entry reads back.
    pub fn check_roundtrip(store: StoreHandle, key: &str, value: StoreValue) {
        let entry = TypedEntry::<StoreValue>::new(store, key);
        entry.set(value.clone()).expect("Failed to save");
        assert!(entry.exists());
        assert_eq!(entry.value(), Some(value));
    }

    /// Checks that deleting twice leaves the key absent without error.
    pub fn check_delete_idempotent(store: StoreHandle, key: &str) {
        let entry = TypedEntry::<bool>::new(store, key);
        entry.set(true).expect("Failed to save");
        entry.delete().expect("First delete failed");
        entry.delete().expect("Second delete failed");
        assert!(!entry.exists());
        assert!(entry.value().is_none());
    }

    /// Checks that saving `None` behaves like delete.
    pub fn check_save_none_deletes(store: StoreHandle, key: &str) {
        let entry = TypedEntry::<i64>::new(store, key);
        entry.set(1).expect("Failed to save");
        entry.save(None).expect("Failed to save None");
        assert!(!entry.exists());
    }

    /// Runs every contract check against `store`.
    pub fn check_all(store: StoreHandle) {
        check_roundtrip(Arc::clone(&store), "contract.roundtrip", StoreValue::from("v"));
        check_delete_idempotent(Arc::clone(&store), "contract.delete");
        check_save_none_deletes(store, "contract.none");
    }
}
