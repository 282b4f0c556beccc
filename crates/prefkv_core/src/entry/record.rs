//! Enumeration record.

use crate::convert::FromStoreValue;
use prefkv_storage::StoreValue;

/// One key-value pair as enumerated from a store.
///
/// Records are snapshots: they are produced on demand from the store's dump
/// and do not change when the store does.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    key: String,
    value: StoreValue,
}

impl Entry {
    /// Creates a record.
    pub fn new(key: impl Into<String>, value: StoreValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// Returns the key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the untyped value.
    pub fn value(&self) -> &StoreValue {
        &self.value
    }

    /// Reads the value as `T`, or `None` if it has a different shape.
    pub fn get<T: FromStoreValue>(&self) -> Option<T> {
        T::from_store_value(self.value.clone())
    }

    /// Splits the record into its key and value.
    pub fn into_parts(self) -> (String, StoreValue) {
        (self.key, self.value)
    }
}

impl From<(String, StoreValue)> for Entry {
    fn from((key, value): (String, StoreValue)) -> Self {
        Self { key, value }
    }
}
