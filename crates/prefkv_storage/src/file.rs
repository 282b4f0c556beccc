//! File-based store for persistent settings.

use crate::error::StorageResult;
use crate::format::{decode_document, encode_document};
use crate::store::KeyValueStore;
use crate::value::StoreValue;
use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, trace};

/// A file-backed key-value store.
///
/// Entries are held in memory and written out as a single snapshot
/// document on [`flush`](KeyValueStore::flush). Data survives process
/// restarts once flushed.
///
/// # Durability
///
/// - `flush()` writes the snapshot to `<path>.tmp`, calls
///   `File::sync_all()`, renames it over `path`, then fsyncs the parent
///   directory (on Unix)
/// - A failed flush keeps the store dirty, so the next flush retries
/// - A crash mid-flush leaves the previous snapshot intact
/// - Flushing a store with no changes since the last flush does nothing
///
/// # Thread Safety
///
/// This store is thread-safe and can be shared across threads.
/// Concurrent flushes are serialized.
///
/// # Example
///
/// ```no_run
/// use prefkv_storage::{FileStore, KeyValueStore, StoreValue};
/// use std::path::Path;
///
/// let store = FileStore::open(Path::new("settings.prefkv")).unwrap();
/// store.set("theme", StoreValue::from("dark"));
/// store.flush().unwrap();  // Ensure the value is durable
/// ```
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, StoreValue>>,
    dirty: AtomicBool,
    flush_lock: Mutex<()>,
}

impl FileStore {
    /// Opens the store at the given path.
    ///
    /// If the file exists its snapshot is loaded. If it doesn't exist the
    /// store starts empty and the file is created on the first flush.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not contain a
    /// valid store document.
    pub fn open(path: &Path) -> StorageResult<Self> {
        let entries = if path.exists() {
            let bytes = fs::read(path)?;
            if bytes.is_empty() {
                BTreeMap::new()
            } else {
                decode_document(&bytes)?
            }
        } else {
            BTreeMap::new()
        };

        debug!(path = %path.display(), entries = entries.len(), "opened file store");

        Ok(Self {
            path: path.to_path_buf(),
            entries: RwLock::new(entries),
            dirty: AtomicBool::new(false),
            flush_lock: Mutex::new(()),
        })
    }

    /// Opens the store, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directories cannot be created or the file cannot
    /// be loaded.
    pub fn open_with_create_dirs(path: &Path) -> StorageResult<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Self::open(path)
    }

    /// Returns the path to the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if there are changes not yet flushed.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("store"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Writes `bytes` to `<path>.tmp`, syncs it, renames it over `path`
    /// and syncs the parent directory so the rename itself is durable.
    ///
    /// The temporary file is removed if writing or renaming it fails.
    fn write_snapshot(&self, bytes: &[u8]) -> StorageResult<()> {
        let temp = self.temp_path();
        let written = File::create(&temp).and_then(|mut file| {
            file.write_all(bytes)?;
            file.sync_all()
        });
        if let Err(e) = written.and_then(|()| fs::rename(&temp, &self.path)) {
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }

        sync_parent_directory(&self.path)?;
        Ok(())
    }
}

/// Fsyncs the directory holding `path` so a rename into it survives a crash.
#[cfg(unix)]
fn sync_parent_directory(path: &Path) -> StorageResult<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    File::open(parent)?.sync_all()?;
    Ok(())
}

/// NTFS journals metadata, and directory handles cannot be fsynced there.
#[cfg(not(unix))]
fn sync_parent_directory(_path: &Path) -> StorageResult<()> {
    Ok(())
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<StoreValue> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: StoreValue) {
        self.entries.write().insert(key.to_string(), value);
        self.dirty.store(true, Ordering::Release);
    }

    fn remove(&self, key: &str) {
        if self.entries.write().remove(key).is_some() {
            self.dirty.store(true, Ordering::Release);
        }
    }

    fn entries(&self) -> Vec<(String, StoreValue)> {
        self.entries
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn flush(&self) -> StorageResult<()> {
        let _guard = self.flush_lock.lock();

        if !self.dirty.swap(false, Ordering::AcqRel) {
            trace!(path = %self.path.display(), "flush skipped, store is clean");
            return Ok(());
        }

        let written = encode_document(&self.entries.read())
            .and_then(|bytes| self.write_snapshot(&bytes).map(|()| bytes.len()));
        match written {
            Ok(len) => {
                debug!(path = %self.path.display(), bytes = len, "flushed file store");
                Ok(())
            }
            Err(e) => {
                // Pending writes must be retried by the next flush
                self.dirty.store(true, Ordering::Release);
                Err(e)
            }
        }
    }

    fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use tempfile::tempdir;

    #[test]
    fn file_open_missing_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.prefkv");

        let store = FileStore::open(&path).unwrap();
        assert!(store.entries().is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn file_flush_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.prefkv");

        let store = FileStore::open(&path).unwrap();
        store.set("k", StoreValue::Integer(1));
        assert!(store.is_dirty());
        store.flush().unwrap();

        assert!(path.exists());
        assert!(!store.is_dirty());
        assert!(!dir.path().join("settings.prefkv.tmp").exists());
    }

    #[test]
    fn file_persistence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.prefkv");

        // Write data
        {
            let store = FileStore::open(&path).unwrap();
            store.set("name", StoreValue::from("alice"));
            store.set("avatar", StoreValue::Bytes(vec![0xde, 0xad]));
            store.flush().unwrap();
        }

        // Reopen and read
        {
            let store = FileStore::open(&path).unwrap();
            assert_eq!(store.get("name"), Some(StoreValue::from("alice")));
            assert_eq!(store.get("avatar"), Some(StoreValue::Bytes(vec![0xde, 0xad])));
        }
    }

    #[test]
    fn file_unflushed_writes_are_lost() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.prefkv");

        {
            let store = FileStore::open(&path).unwrap();
            store.set("kept", StoreValue::Bool(true));
            store.flush().unwrap();
            store.set("dropped", StoreValue::Bool(true));
        }

        let store = FileStore::open(&path).unwrap();
        assert!(store.contains_key("kept"));
        assert!(!store.contains_key("dropped"));
    }

    #[test]
    fn file_remove_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.prefkv");

        let store = FileStore::open(&path).unwrap();
        store.set("a", StoreValue::Integer(1));
        store.set("b", StoreValue::Integer(2));
        store.flush().unwrap();
        store.remove("a");
        store.flush().unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert!(reopened.get("a").is_none());
        assert_eq!(reopened.get("b"), Some(StoreValue::Integer(2)));
    }

    #[test]
    fn file_remove_missing_stays_clean() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(&dir.path().join("s.prefkv")).unwrap();
        store.remove("nothing");
        assert!(!store.is_dirty());
    }

    #[test]
    fn file_clean_flush_is_noop() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.prefkv");

        let store = FileStore::open(&path).unwrap();
        store.flush().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn file_empty_file_is_empty_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.prefkv");
        File::create(&path).unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(store.entries().is_empty());
    }

    #[test]
    fn file_corrupted_fails_to_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.prefkv");
        fs::write(&path, b"definitely not a store").unwrap();

        let result = FileStore::open(&path);
        assert!(matches!(result, Err(StorageError::Corrupted(_))));
    }

    #[test]
    fn file_create_with_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("path").join("settings.prefkv");

        let store = FileStore::open_with_create_dirs(&path).unwrap();
        store.set("x", StoreValue::Integer(1));
        store.flush().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn file_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.prefkv");

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.path(), path);
    }

    #[test]
    fn file_failed_flush_stays_dirty_and_cleans_up() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.prefkv");

        let store = FileStore::open(&path).unwrap();
        store.set("k", StoreValue::Integer(1));

        // A non-empty directory at the target makes the rename fail
        fs::create_dir(&path).unwrap();
        fs::write(path.join("occupied"), b"x").unwrap();

        assert!(matches!(store.flush(), Err(StorageError::Io(_))));
        assert!(store.is_dirty());
        assert!(!dir.path().join("settings.prefkv.tmp").exists());

        // Once the target is free again the pending write goes out
        fs::remove_dir_all(&path).unwrap();
        store.flush().unwrap();
        assert!(!store.is_dirty());
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("k"), Some(StoreValue::Integer(1)));
    }

    #[test]
    fn file_flush_syncs_parent_directory() {
        let dir = tempdir().unwrap();
        sync_parent_directory(&dir.path().join("settings.prefkv")).unwrap();
        // A bare file name resolves to the working directory
        sync_parent_directory(Path::new("settings.prefkv")).unwrap();
    }

    #[test]
    fn file_flush_into_missing_directory_fails_and_stays_dirty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("settings.prefkv");

        let store = FileStore::open(&path).unwrap();
        store.set("k", StoreValue::Bool(true));
        assert!(store.flush().is_err());
        assert!(store.is_dirty());
    }
}
