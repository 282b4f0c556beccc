//! Typed entry implementation.

use crate::bulk;
use crate::config::Config;
use crate::convert::{FromStoreValue, IntoStoreValue};
use crate::entry::Entry;
use crate::error::CoreResult;
use prefkv_storage::{StoreHandle, StoreValue};
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, trace};

/// A typed view of one key in a store.
///
/// `TypedEntry<T>` reads and writes values of type `T` under a fixed key.
/// It owns nothing but a handle to the store: creating or dropping an entry
/// never touches stored data.
///
/// Reads never fail. A missing key and a stored value of another type both
/// read as `None`, and the `_or` accessors fall back to a default. Writes
/// are followed by a store flush unless [`Config::sync_on_write`] is off.
///
/// Raw accessors need `T: FromStoreValue` / `T: IntoStoreValue`. Structured
/// types go through the codec accessors instead
/// ([`decoded_value`](Self::decoded_value),
/// [`save_encoded_value`](Self::save_encoded_value)).
///
/// # Example
///
/// ```rust
/// use prefkv_core::TypedEntry;
/// use prefkv_storage::InMemoryStore;
/// use std::sync::Arc;
///
/// let store = Arc::new(InMemoryStore::new());
/// let volume = TypedEntry::<i64>::new(store, "audio.volume");
///
/// assert_eq!(volume.value(), None);
/// volume.set(7).unwrap();
/// assert_eq!(volume.value_or(3), 7);
///
/// volume.delete().unwrap();
/// assert_eq!(volume.value_or(3), 3);
/// ```
pub struct TypedEntry<T> {
    /// Shared store handle.
    store: StoreHandle,
    /// Key this entry reads and writes.
    key: String,
    /// Write and codec settings.
    config: Config,
    /// Type marker.
    _marker: PhantomData<fn() -> T>,
}

impl<T> TypedEntry<T> {
    /// Creates an entry for `key` with the default configuration.
    pub fn new(store: StoreHandle, key: impl Into<String>) -> Self {
        Self::with_config(store, key, Config::default())
    }

    /// Creates an entry for `key` with an explicit configuration.
    pub fn with_config(store: StoreHandle, key: impl Into<String>, config: Config) -> Self {
        Self {
            store,
            key: key.into(),
            config,
            _marker: PhantomData,
        }
    }

    /// Returns the key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the store handle.
    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns `true` if anything is stored under the key, whatever its type.
    pub fn exists(&self) -> bool {
        self.store.contains_key(&self.key)
    }

    /// Removes the stored value.
    ///
    /// Deleting a missing key is a no-op apart from the flush.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails to flush.
    pub fn delete(&self) -> CoreResult<()> {
        self.write(None)
    }

    /// Returns every entry in the store, not just this key.
    pub fn all_entries(&self) -> Vec<Entry> {
        bulk::all_entries(&*self.store)
    }

    /// Returns the store's entries whose key is one of `keys`.
    pub fn all_entries_filtered<K: AsRef<str>>(&self, keys: &[K]) -> Vec<Entry> {
        bulk::all_entries_filtered(&*self.store, keys)
    }

    /// Deletes every entry in the store and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails to flush.
    pub fn delete_all(&self) -> CoreResult<usize> {
        let entries = self.all_entries();
        bulk::delete_entries(&*self.store, &entries, self.config.sync_on_write)
    }

    /// Deletes the store's entries whose key is one of `keys`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails to flush.
    pub fn delete_all_filtered<K: AsRef<str>>(&self, keys: &[K]) -> CoreResult<usize> {
        let entries = self.all_entries_filtered(keys);
        bulk::delete_entries(&*self.store, &entries, self.config.sync_on_write)
    }

    /// Reads the untyped value stored under the key.
    pub(crate) fn raw_value(&self) -> Option<StoreValue> {
        self.store.get(&self.key)
    }

    /// Writes or removes the untyped value, then flushes if configured.
    pub(crate) fn write(&self, value: Option<StoreValue>) -> CoreResult<()> {
        match value {
            Some(value) => {
                debug!(key = %self.key, kind = value.kind(), "saving entry");
                self.store.set(&self.key, value);
            }
            None => {
                debug!(key = %self.key, "deleting entry");
                self.store.remove(&self.key);
            }
        }

        if self.config.sync_on_write {
            trace!(key = %self.key, "flushing store");
            self.store.flush()?;
        }
        Ok(())
    }
}

impl<T: FromStoreValue> TypedEntry<T> {
    /// Returns the stored value, or `None` if it is missing or not a `T`.
    pub fn value(&self) -> Option<T> {
        self.raw_value().and_then(T::from_store_value)
    }

    /// Returns the stored value, or `default` if there is none.
    pub fn value_or(&self, default: T) -> T {
        self.value().unwrap_or(default)
    }

    /// Returns the stored value, or computes a default if there is none.
    pub fn value_or_else<F: FnOnce() -> T>(&self, default: F) -> T {
        self.value().unwrap_or_else(default)
    }

    /// Reads the stored value and converts it with `transform`.
    ///
    /// Returns `default` when nothing is stored or when `transform` returns
    /// `None`. This adapts a raw representation (say, an integer code) into
    /// a richer type without a codec; unknown codes fall back to `default`.
    ///
    /// ```rust
    /// use prefkv_core::TypedEntry;
    /// use prefkv_storage::InMemoryStore;
    /// use std::sync::Arc;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum Theme { Light, Dark }
    ///
    /// let theme = TypedEntry::<i64>::new(Arc::new(InMemoryStore::new()), "ui.theme");
    /// theme.set(1).unwrap();
    ///
    /// let parsed = theme.converted_value_or(Theme::Light, |code| match code {
    ///     0 => Some(Theme::Light),
    ///     1 => Some(Theme::Dark),
    ///     _ => None,
    /// });
    /// assert_eq!(parsed, Theme::Dark);
    /// ```
    pub fn converted_value_or<U, F>(&self, default: U, transform: F) -> U
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.value().and_then(transform).unwrap_or(default)
    }
}

impl<T: IntoStoreValue> TypedEntry<T> {
    /// Stores `value`, or removes the key when it is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails to flush.
    pub fn save(&self, value: Option<T>) -> CoreResult<()> {
        self.write(value.map(IntoStoreValue::into_store_value))
    }

    /// Stores `value`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails to flush.
    pub fn set(&self, value: T) -> CoreResult<()> {
        self.save(Some(value))
    }
}

impl<T> Clone for TypedEntry<T> {
    fn clone(&self) -> Self {
        Self {
            store: StoreHandle::clone(&self.store),
            key: self.key.clone(),
            config: self.config,
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for TypedEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedEntry")
            .field("key", &self.key)
            .field("type", &std::any::type_name::<T>())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
