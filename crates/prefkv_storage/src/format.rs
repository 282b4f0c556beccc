//! On-disk document format for [`FileStore`](crate::FileStore).
//!
//! A store file is a single CBOR map:
//!
//! ```text
//! { "version": 1, "entries": { <key>: <value>, ... } }
//! ```
//!
//! Values map one-to-one onto CBOR major types. Blobs are CBOR byte strings,
//! nested maps always have text keys.

use crate::error::{StorageError, StorageResult};
use crate::value::StoreValue;
use ciborium::value::{Integer, Value};
use std::collections::BTreeMap;

/// Format version written by this build.
pub const FORMAT_VERSION: u64 = 1;

const VERSION_FIELD: &str = "version";
const ENTRIES_FIELD: &str = "entries";

/// Encodes a full store snapshot.
pub(crate) fn encode_document(entries: &BTreeMap<String, StoreValue>) -> StorageResult<Vec<u8>> {
    let body = entries
        .iter()
        .map(|(k, v)| (Value::Text(k.clone()), to_cbor(v)))
        .collect();

    let document = Value::Map(vec![
        (
            Value::Text(VERSION_FIELD.into()),
            Value::Integer(Integer::from(FORMAT_VERSION)),
        ),
        (Value::Text(ENTRIES_FIELD.into()), Value::Map(body)),
    ]);

    let mut buf = Vec::new();
    ciborium::into_writer(&document, &mut buf)
        .map_err(|e| StorageError::corrupted(format!("failed to encode store: {e}")))?;
    Ok(buf)
}

/// Decodes a store snapshot produced by [`encode_document`].
pub(crate) fn decode_document(bytes: &[u8]) -> StorageResult<BTreeMap<String, StoreValue>> {
    let document: Value = ciborium::from_reader(bytes)
        .map_err(|e| StorageError::corrupted(format!("invalid CBOR document: {e}")))?;

    let fields = match document {
        Value::Map(fields) => fields,
        other => {
            return Err(StorageError::corrupted(format!(
                "expected top-level map, found {}",
                cbor_kind(&other)
            )))
        }
    };

    let mut version = None;
    let mut body = None;
    for (name, value) in fields {
        let Value::Text(name) = name else { continue };
        match name.as_str() {
            VERSION_FIELD => version = Some(value),
            ENTRIES_FIELD => body = Some(value),
            // Unknown fields are ignored so newer writers can add metadata
            _ => {}
        }
    }

    let version = match version {
        Some(Value::Integer(i)) => u64::try_from(i).ok(),
        _ => None,
    }
    .ok_or_else(|| StorageError::corrupted("missing format version"))?;
    if version != FORMAT_VERSION {
        return Err(StorageError::UnsupportedVersion {
            found: version,
            expected: FORMAT_VERSION,
        });
    }

    match body {
        Some(Value::Map(pairs)) => decode_map(pairs),
        Some(other) => Err(StorageError::corrupted(format!(
            "expected entries map, found {}",
            cbor_kind(&other)
        ))),
        None => Err(StorageError::corrupted("missing entries")),
    }
}

fn to_cbor(value: &StoreValue) -> Value {
    match value {
        StoreValue::Bool(b) => Value::Bool(*b),
        StoreValue::Integer(n) => Value::Integer(Integer::from(*n)),
        StoreValue::Float(f) => Value::Float(*f),
        StoreValue::Text(s) => Value::Text(s.clone()),
        StoreValue::Bytes(b) => Value::Bytes(b.clone()),
        StoreValue::Array(items) => Value::Array(items.iter().map(to_cbor).collect()),
        StoreValue::Map(map) => Value::Map(
            map.iter()
                .map(|(k, v)| (Value::Text(k.clone()), to_cbor(v)))
                .collect(),
        ),
    }
}

fn from_cbor(value: Value) -> StorageResult<StoreValue> {
    Ok(match value {
        Value::Bool(b) => StoreValue::Bool(b),
        Value::Integer(n) => StoreValue::Integer(
            i64::try_from(n).map_err(|_| StorageError::corrupted("integer out of range"))?,
        ),
        Value::Float(f) => StoreValue::Float(f),
        Value::Text(s) => StoreValue::Text(s),
        Value::Bytes(b) => StoreValue::Bytes(b),
        Value::Array(items) => StoreValue::Array(
            items
                .into_iter()
                .map(from_cbor)
                .collect::<StorageResult<_>>()?,
        ),
        Value::Map(pairs) => StoreValue::Map(decode_map(pairs)?),
        other => {
            return Err(StorageError::corrupted(format!(
                "unsupported value type: {}",
                cbor_kind(&other)
            )))
        }
    })
}

fn decode_map(pairs: Vec<(Value, Value)>) -> StorageResult<BTreeMap<String, StoreValue>> {
    let mut map = BTreeMap::new();
    for (k, v) in pairs {
        let key = match k {
            Value::Text(s) => s,
            other => {
                return Err(StorageError::corrupted(format!(
                    "map key must be text, found {}",
                    cbor_kind(&other)
                )))
            }
        };
        map.insert(key, from_cbor(v)?);
    }
    Ok(map)
}

fn cbor_kind(value: &Value) -> &'static str {
    match value {
        Value::Integer(_) => "integer",
        Value::Bytes(_) => "bytes",
        Value::Float(_) => "float",
        Value::Text(_) => "text",
        Value::Bool(_) => "bool",
        Value::Null => "null",
        Value::Tag(..) => "tag",
        Value::Array(_) => "array",
        Value::Map(_) => "map",
        _ => "unknown",
    }
}
