//! Untyped store value.

use std::collections::BTreeMap;

/// An untyped value held by a [`KeyValueStore`](crate::KeyValueStore).
///
/// The variants cover the property-list shapes a preferences store keeps:
/// scalars, text, opaque byte blobs, and nested arrays and string-keyed maps.
/// Structured application types are stored as [`StoreValue::Bytes`] after
/// being run through a codec.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreValue {
    /// Boolean value.
    Bool(bool),
    /// Signed integer.
    Integer(i64),
    /// Double-precision float.
    Float(f64),
    /// UTF-8 text.
    Text(String),
    /// Opaque byte blob.
    Bytes(Vec<u8>),
    /// Ordered list of values.
    Array(Vec<StoreValue>),
    /// String-keyed dictionary.
    Map(BTreeMap<String, StoreValue>),
}

impl StoreValue {
    /// Returns a short name for the variant, used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            StoreValue::Bool(_) => "bool",
            StoreValue::Integer(_) => "integer",
            StoreValue::Float(_) => "float",
            StoreValue::Text(_) => "text",
            StoreValue::Bytes(_) => "bytes",
            StoreValue::Array(_) => "array",
            StoreValue::Map(_) => "map",
        }
    }

    /// Get this value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StoreValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get this value as an integer, if it is one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            StoreValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float.
    ///
    /// Integers widen to `f64`, the way a number stored by one writer can be
    /// read back as a double by another.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            StoreValue::Float(f) => Some(*f),
            StoreValue::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get this value as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StoreValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a byte slice, if it is a blob.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            StoreValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Get this value as an array, if it is one.
    pub fn as_array(&self) -> Option<&[StoreValue]> {
        match self {
            StoreValue::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get this value as a map, if it is one.
    pub fn as_map(&self) -> Option<&BTreeMap<String, StoreValue>> {
        match self {
            StoreValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Consumes the value, returning the blob if it is one.
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            StoreValue::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl From<bool> for StoreValue {
    fn from(value: bool) -> Self {
        StoreValue::Bool(value)
    }
}

impl From<i64> for StoreValue {
    fn from(value: i64) -> Self {
        StoreValue::Integer(value)
    }
}

impl From<f64> for StoreValue {
    fn from(value: f64) -> Self {
        StoreValue::Float(value)
    }
}

impl From<&str> for StoreValue {
    fn from(value: &str) -> Self {
        StoreValue::Text(value.to_string())
    }
}

impl From<String> for StoreValue {
    fn from(value: String) -> Self {
        StoreValue::Text(value)
    }
}

impl From<Vec<u8>> for StoreValue {
    fn from(value: Vec<u8>) -> Self {
        StoreValue::Bytes(value)
    }
}
