//! Store-wide enumeration and deletion.
//!
//! These operate on the whole store rather than a single key. Enumeration
//! order is whatever the store yields and is not stable.

use crate::entry::Entry;
use crate::error::CoreResult;
use prefkv_storage::KeyValueStore;
use std::collections::HashSet;
use tracing::debug;

/// Returns every entry in the store.
pub fn all_entries<S: KeyValueStore + ?Sized>(store: &S) -> Vec<Entry> {
    store.entries().into_iter().map(Entry::from).collect()
}

/// Returns the entries whose key is one of `keys`.
///
/// Keys that are not stored are skipped; the result never contains more
/// than one record per key.
pub fn all_entries_filtered<S, K>(store: &S, keys: &[K]) -> Vec<Entry>
where
    S: KeyValueStore + ?Sized,
    K: AsRef<str>,
{
    let wanted: HashSet<&str> = keys.iter().map(|k| k.as_ref()).collect();
    store
        .entries()
        .into_iter()
        .filter(|(key, _)| wanted.contains(key.as_str()))
        .map(Entry::from)
        .collect()
}

/// Deletes every entry in the store and flushes once.
///
/// Returns the number of entries removed.
///
/// # Errors
///
/// Returns an error if the final flush fails.
pub fn delete_all<S: KeyValueStore + ?Sized>(store: &S) -> CoreResult<usize> {
    let entries = all_entries(store);
    delete_entries(store, &entries, true)
}

/// Deletes the entries whose key is one of `keys` and flushes once.
///
/// Entries outside `keys` are untouched. Returns the number removed.
///
/// # Errors
///
/// Returns an error if the final flush fails.
pub fn delete_all_filtered<S, K>(store: &S, keys: &[K]) -> CoreResult<usize>
where
    S: KeyValueStore + ?Sized,
    K: AsRef<str>,
{
    let entries = all_entries_filtered(store, keys);
    delete_entries(store, &entries, true)
}

pub(crate) fn delete_entries<S: KeyValueStore + ?Sized>(
    store: &S,
    entries: &[Entry],
    flush: bool,
) -> CoreResult<usize> {
    for entry in entries {
        store.remove(entry.key());
    }
    if flush {
        store.flush()?;
    }
    debug!(removed = entries.len(), "deleted entries");
    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use prefkv_storage::{InMemoryStore, StoreValue};

    fn sorted_keys(entries: &[Entry]) -> Vec<&str> {
        let mut keys: Vec<&str> = entries.iter().map(Entry::key).collect();
        keys.sort_unstable();
        keys
    }

    fn populated() -> InMemoryStore {
        InMemoryStore::with_entries([
            ("1", StoreValue::from("value 1")),
            ("2", StoreValue::from("value 2")),
            ("3", StoreValue::from("value 3")),
            ("4", StoreValue::Integer(4)),
            ("other", StoreValue::Bool(true)),
        ])
    }

    #[test]
    fn all_entries_lists_everything() {
        let store = populated();
        let entries = all_entries(&store);
        assert_eq!(sorted_keys(&entries), vec!["1", "2", "3", "4", "other"]);
    }

    #[test]
    fn filtered_entries_keep_values() {
        let store = populated();
        let entries = all_entries_filtered(&store, &["4", "1", "missing"]);

        assert_eq!(sorted_keys(&entries), vec!["1", "4"]);
        let four = entries.iter().find(|e| e.key() == "4").unwrap();
        assert_eq!(four.value(), &StoreValue::Integer(4));
    }

    #[test]
    fn duplicate_filter_keys_yield_one_record() {
        let store = populated();
        let entries = all_entries_filtered(&store, &["1", "1"]);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn delete_all_filtered_leaves_the_rest() {
        let store = populated();
        let keys = ["1", "2", "3", "4"];

        let removed = delete_all_filtered(&store, &keys).unwrap();
        assert_eq!(removed, 4);
        assert!(all_entries_filtered(&store, &keys).is_empty());
        assert_eq!(store.get("other"), Some(StoreValue::Bool(true)));
    }

    #[test]
    fn delete_all_flushes_once() {
        let store = populated();
        let removed = delete_all(&store).unwrap();

        assert_eq!(removed, 5);
        assert!(store.is_empty());
        assert_eq!(store.flush_count(), 1);
    }

    #[test]
    fn delete_all_on_empty_store() {
        let store = InMemoryStore::new();
        assert_eq!(delete_all(&store).unwrap(), 0);
        assert_eq!(store.flush_count(), 1);
    }

    #[test]
    fn accepts_owned_keys() {
        let store = populated();
        let keys = vec!["2".to_string(), "3".to_string()];
        assert_eq!(all_entries_filtered(&store, &keys).len(), 2);
    }
}
