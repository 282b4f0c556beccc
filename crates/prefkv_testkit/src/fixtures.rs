//! Test fixtures and store helpers.
//!
//! Every fixture creates its own store, so tests never observe each
//! other's writes.

use prefkv_storage::{FileStore, InMemoryStore, StoreHandle};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// File name used for file-backed test stores.
pub const STORE_FILE_NAME: &str = "test.prefkv";

/// A test store with automatic cleanup.
pub struct TestStore {
    /// The store handle.
    pub store: StoreHandle,
    /// The temporary directory (kept alive to prevent cleanup).
    _temp_dir: Option<TempDir>,
}

impl TestStore {
    /// Creates a new in-memory test store.
    pub fn memory() -> Self {
        Self {
            store: Arc::new(InMemoryStore::new()),
            _temp_dir: None,
        }
    }

    /// Creates a new file-backed test store in a fresh temporary directory.
    pub fn file() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = FileStore::open(&temp_dir.path().join(STORE_FILE_NAME))
            .expect("Failed to open file store");

        Self {
            store: Arc::new(store),
            _temp_dir: Some(temp_dir),
        }
    }

    /// Returns the store file path if file-backed, `None` if in-memory.
    pub fn path(&self) -> Option<PathBuf> {
        self._temp_dir
            .as_ref()
            .map(|d| d.path().join(STORE_FILE_NAME))
    }

    /// Returns a clone of the store handle.
    pub fn handle(&self) -> StoreHandle {
        Arc::clone(&self.store)
    }

    /// Drops the current handle and reopens the store from disk.
    ///
    /// Only what was flushed survives. In-memory stores cannot be reopened.
    ///
    /// # Panics
    ///
    /// Panics if the store is in-memory or the file cannot be reopened.
    pub fn reopen(&mut self) {
        let path = self.path().expect("Only file stores can be reopened");
        let store = FileStore::open(&path).expect("Failed to reopen file store");
        self.store = Arc::new(store);
    }
}

impl std::ops::Deref for TestStore {
    type Target = StoreHandle;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

/// Runs a test with a fresh in-memory store.
///
/// # Example
///
/// ```rust
/// use prefkv_storage::KeyValueStore;
/// use prefkv_testkit::with_memory_store;
///
/// with_memory_store(|store| {
///     assert!(store.entries().is_empty());
/// });
/// ```
pub fn with_memory_store<F, R>(f: F) -> R
where
    F: FnOnce(StoreHandle) -> R,
{
    let test_store = TestStore::memory();
    f(test_store.handle())
}

/// Runs a test with a fresh file-backed store and its path.
pub fn with_file_store<F, R>(f: F) -> R
where
    F: FnOnce(StoreHandle, &Path) -> R,
{
    let test_store = TestStore::file();
    let path = test_store.path().expect("File store should have a path");
    f(test_store.handle(), &path)
}

/// Test scenario helpers.
pub mod scenarios {
    use super::*;
    use prefkv_storage::{KeyValueStore, StoreValue};

    /// Creates a store holding `count` integer entries keyed `key.0` ...
    pub fn populated_store(count: usize) -> TestStore {
        let test_store = TestStore::memory();
        for i in 0..count {
            let value = i64::try_from(i).expect("count fits in i64");
            test_store.store.set(&format!("key.{i}"), StoreValue::Integer(value));
        }
        test_store
    }

    /// Creates a store holding one entry of every value shape.
    pub fn mixed_store() -> TestStore {
        let test_store = TestStore::memory();
        let store = &test_store.store;
        store.set("bool", StoreValue::Bool(true));
        store.set("integer", StoreValue::Integer(-7));
        store.set("float", StoreValue::Float(2.5));
        store.set("text", StoreValue::from("hello"));
        store.set("bytes", StoreValue::Bytes(vec![1, 2, 3]));
        store.set(
            "array",
            StoreValue::Array(vec![StoreValue::Integer(1), StoreValue::Integer(2)]),
        );
        test_store
    }
}
