//! Conversions between Rust types and untyped store values.
//!
//! A store is untyped, so reading a key as `T` is a runtime check. A value
//! of the wrong shape converts to `None`, exactly like a missing key.
//!
//! Byte blobs use [`bytes::Bytes`]. A `Vec<u8>` is a list of integers like
//! any other `Vec<T>`.

use bytes::Bytes;
use prefkv_storage::StoreValue;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Types that can be read from an untyped [`StoreValue`].
pub trait FromStoreValue: Sized {
    /// Converts `value` into `Self`, or `None` if it has a different shape.
    fn from_store_value(value: StoreValue) -> Option<Self>;
}

/// Types that can be written as an untyped [`StoreValue`].
pub trait IntoStoreValue {
    /// Converts `self` into a store value.
    fn into_store_value(self) -> StoreValue;
}

impl FromStoreValue for StoreValue {
    fn from_store_value(value: StoreValue) -> Option<Self> {
        Some(value)
    }
}

impl IntoStoreValue for StoreValue {
    fn into_store_value(self) -> StoreValue {
        self
    }
}

impl FromStoreValue for bool {
    fn from_store_value(value: StoreValue) -> Option<Self> {
        value.as_bool()
    }
}

impl IntoStoreValue for bool {
    fn into_store_value(self) -> StoreValue {
        StoreValue::Bool(self)
    }
}

macro_rules! integer_conversions {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromStoreValue for $ty {
                fn from_store_value(value: StoreValue) -> Option<Self> {
                    value.as_integer().and_then(|n| <$ty>::try_from(n).ok())
                }
            }

            impl IntoStoreValue for $ty {
                fn into_store_value(self) -> StoreValue {
                    StoreValue::Integer(i64::from(self))
                }
            }
        )*
    };
}

integer_conversions!(i8, i16, i32, i64, u8, u16, u32);

// u64 does not fit in every stored integer, so it is read-only.
impl FromStoreValue for u64 {
    fn from_store_value(value: StoreValue) -> Option<Self> {
        value.as_integer().and_then(|n| u64::try_from(n).ok())
    }
}

impl FromStoreValue for f64 {
    fn from_store_value(value: StoreValue) -> Option<Self> {
        value.as_float()
    }
}

impl IntoStoreValue for f64 {
    fn into_store_value(self) -> StoreValue {
        StoreValue::Float(self)
    }
}

impl FromStoreValue for f32 {
    /// Finite values beyond `f32`'s range are a mismatch; infinities and NaN
    /// carry over.
    #[allow(clippy::cast_possible_truncation)]
    fn from_store_value(value: StoreValue) -> Option<Self> {
        value.as_float().and_then(|f| {
            let narrowed = f as f32;
            (narrowed.is_finite() || !f.is_finite()).then_some(narrowed)
        })
    }
}

impl IntoStoreValue for f32 {
    fn into_store_value(self) -> StoreValue {
        StoreValue::Float(f64::from(self))
    }
}

impl FromStoreValue for String {
    fn from_store_value(value: StoreValue) -> Option<Self> {
        match value {
            StoreValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl IntoStoreValue for String {
    fn into_store_value(self) -> StoreValue {
        StoreValue::Text(self)
    }
}

impl IntoStoreValue for &str {
    fn into_store_value(self) -> StoreValue {
        StoreValue::Text(self.to_string())
    }
}

impl FromStoreValue for Bytes {
    fn from_store_value(value: StoreValue) -> Option<Self> {
        value.into_bytes().map(Bytes::from)
    }
}

impl IntoStoreValue for Bytes {
    fn into_store_value(self) -> StoreValue {
        StoreValue::Bytes(self.to_vec())
    }
}

/// Arrays convert only if every element does.
impl<T: FromStoreValue> FromStoreValue for Vec<T> {
    fn from_store_value(value: StoreValue) -> Option<Self> {
        match value {
            StoreValue::Array(items) => items.into_iter().map(T::from_store_value).collect(),
            _ => None,
        }
    }
}

impl<T: IntoStoreValue> IntoStoreValue for Vec<T> {
    fn into_store_value(self) -> StoreValue {
        StoreValue::Array(self.into_iter().map(IntoStoreValue::into_store_value).collect())
    }
}

impl<T: FromStoreValue> FromStoreValue for BTreeMap<String, T> {
    fn from_store_value(value: StoreValue) -> Option<Self> {
        match value {
            StoreValue::Map(map) => map
                .into_iter()
                .map(|(k, v)| T::from_store_value(v).map(|v| (k, v)))
                .collect(),
            _ => None,
        }
    }
}

impl<T: IntoStoreValue> IntoStoreValue for BTreeMap<String, T> {
    fn into_store_value(self) -> StoreValue {
        StoreValue::Map(
            self.into_iter()
                .map(|(k, v)| (k, v.into_store_value()))
                .collect(),
        )
    }
}

impl<T: FromStoreValue, S: BuildHasher + Default> FromStoreValue for HashMap<String, T, S> {
    fn from_store_value(value: StoreValue) -> Option<Self> {
        match value {
            StoreValue::Map(map) => map
                .into_iter()
                .map(|(k, v)| T::from_store_value(v).map(|v| (k, v)))
                .collect(),
            _ => None,
        }
    }
}

impl<T: IntoStoreValue, S: BuildHasher> IntoStoreValue for HashMap<String, T, S> {
    fn into_store_value(self) -> StoreValue {
        StoreValue::Map(
            self.into_iter()
                .map(|(k, v)| (k, v.into_store_value()))
                .collect(),
        )
    }
}
