//! CBOR codec backed by `ciborium`.

use crate::error::{CodecError, CodecResult};
use crate::{Decoder, Encoder};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// CBOR encoder/decoder.
///
/// Produces smaller blobs than [`JsonCodec`](crate::JsonCodec) and keeps
/// byte strings and non-string map keys intact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CborCodec;

impl CborCodec {
    /// Creates a CBOR codec.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Encoder for CborCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> CodecResult<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf)
            .map_err(|e| CodecError::encoding_failed(e.to_string()))?;
        Ok(buf)
    }
}

impl Decoder for CborCodec {
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> CodecResult<T> {
        ciborium::from_reader(bytes).map_err(|e| CodecError::decoding_failed(e.to_string()))
    }
}
