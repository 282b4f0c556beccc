//! Benchmark utilities.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use prefkv_core::random_key_with_prefix;
use prefkv_storage::StoreValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Generate deterministic filler bytes of the specified size.
pub fn filler_data(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 251) as u8).collect()
}

/// Generate a batch of unique keys.
pub fn generate_keys(count: usize) -> Vec<String> {
    (0..count)
        .map(|_| random_key_with_prefix("bench"))
        .collect()
}

/// Generate key-value pairs with text payloads of the specified size.
pub fn generate_entries(count: usize, payload_size: usize) -> Vec<(String, StoreValue)> {
    let payload = "x".repeat(payload_size);
    generate_keys(count)
        .into_iter()
        .map(|key| (key, StoreValue::Text(payload.clone())))
        .collect()
}

/// A structured value of the kind typically saved through a codec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Display name.
    pub name: String,
    /// Window geometry.
    pub window: [u32; 4],
    /// Recently opened paths.
    pub recent: Vec<String>,
    /// Feature switches.
    pub features: BTreeMap<String, bool>,
}

impl Settings {
    /// Builds a sample with `recent` history items.
    pub fn sample(recent: usize) -> Self {
        Self {
            name: "workspace".to_string(),
            window: [0, 0, 1280, 800],
            recent: (0..recent).map(|i| format!("/home/user/project_{i}")).collect(),
            features: (0..8).map(|i| (format!("feature_{i}"), i % 2 == 0)).collect(),
        }
    }
}
