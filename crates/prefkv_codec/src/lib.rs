//! # prefkv Codec
//!
//! Encoders and decoders for structured values stored through prefkv.
//!
//! A store only holds untyped values. Application types that are not
//! natively representable (structs, enums with data, nested collections)
//! are turned into a byte blob with an [`Encoder`] and read back with a
//! [`Decoder`].
//!
//! ## Codecs
//!
//! - [`JsonCodec`] - serde_json, the default for structured values
//! - [`CborCodec`] - ciborium, compact binary alternative
//!
//! ## Usage
//!
//! ```
//! use prefkv_codec::{Decoder, Encoder, JsonCodec};
//!
//! let codec = JsonCodec::new();
//! let bytes = codec.encode(&vec![1, 2, 3]).unwrap();
//! let decoded: Vec<i32> = codec.decode(&bytes).unwrap();
//! assert_eq!(decoded, vec![1, 2, 3]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod cbor;
mod error;
mod json;

pub use cbor::CborCodec;
pub use error::{CodecError, CodecResult};
pub use json::JsonCodec;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Turns a serializable value into bytes.
pub trait Encoder {
    /// Encodes `value`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::EncodingFailed`] if the value's structure
    /// cannot be represented.
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> CodecResult<Vec<u8>>;
}

/// Turns bytes back into a value.
pub trait Decoder {
    /// Decodes a `T` from `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::DecodingFailed`] on malformed input or when
    /// the input does not match `T`'s shape.
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> CodecResult<T>;
}

/// A type that can both encode and decode.
pub trait Codec: Encoder + Decoder {}

impl<C: Encoder + Decoder> Codec for C {}

impl<E: Encoder + ?Sized> Encoder for &E {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> CodecResult<Vec<u8>> {
        (**self).encode(value)
    }
}

impl<D: Decoder + ?Sized> Decoder for &D {
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> CodecResult<T> {
        (**self).decode(bytes)
    }
}
