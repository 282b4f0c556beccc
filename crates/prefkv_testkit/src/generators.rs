//! Property-based test generators using proptest.

use prefkv_storage::StoreValue;
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Strategy for generating store keys.
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_.]{0,15}").expect("Invalid regex")
}

/// Strategy for generating a set of distinct keys.
pub fn key_set_strategy(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(key_strategy(), 0..=max).prop_map(|keys| keys.into_iter().collect())
}

/// Strategy for generating scalar store values.
///
/// Floats are restricted to finite values so equality checks hold.
pub fn scalar_value_strategy() -> impl Strategy<Value = StoreValue> {
    prop_oneof![
        any::<bool>().prop_map(StoreValue::Bool),
        any::<i64>().prop_map(StoreValue::Integer),
        (-1.0e9f64..1.0e9f64).prop_map(StoreValue::Float),
        ".{0,24}".prop_map(StoreValue::Text),
        prop::collection::vec(any::<u8>(), 0..64).prop_map(StoreValue::Bytes),
    ]
}

/// Strategy for generating arbitrary (possibly nested) store values.
pub fn store_value_strategy() -> impl Strategy<Value = StoreValue> {
    scalar_value_strategy().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(StoreValue::Array),
            prop::collection::btree_map(key_strategy(), inner, 0..4)
                .prop_map(|map: BTreeMap<String, StoreValue>| StoreValue::Map(map)),
        ]
    })
}

/// Strategy for generating a key-value map to preload a store with.
pub fn entries_strategy(max: usize) -> impl Strategy<Value = BTreeMap<String, StoreValue>> {
    prop::collection::btree_map(key_strategy(), store_value_strategy(), 0..=max)
}
