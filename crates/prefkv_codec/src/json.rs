//! JSON codec backed by `serde_json`.

use crate::error::{CodecError, CodecResult};
use crate::{Decoder, Encoder};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// JSON encoder/decoder.
///
/// This is the default codec for structured values. Output is compact
/// unless the codec was built with [`JsonCodec::pretty`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    /// Creates a codec producing compact JSON.
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Creates a codec producing indented, human-readable JSON.
    #[must_use]
    pub const fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Returns `true` if this codec pretty-prints.
    #[must_use]
    pub const fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl Encoder for JsonCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> CodecResult<Vec<u8>> {
        let result = if self.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        };
        result.map_err(|e| CodecError::encoding_failed(e.to_string()))
    }
}

impl Decoder for JsonCodec {
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> CodecResult<T> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::decoding_failed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::BTreeMap;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Profile {
        name: String,
        age: u32,
    }

    #[test]
    fn compact_output() {
        let bytes = JsonCodec::new()
            .encode(&Profile {
                name: "Ada".into(),
                age: 36,
            })
            .unwrap();
        assert_eq!(bytes, br#"{"name":"Ada","age":36}"#);
    }

    #[test]
    fn pretty_output_is_indented() {
        let bytes = JsonCodec::pretty()
            .encode(&Profile {
                name: "Ada".into(),
                age: 36,
            })
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains('\n'));
        assert!(text.contains("  \"name\": \"Ada\""));
    }

    #[test]
    fn decodes_what_it_encodes() {
        let codec = JsonCodec::new();
        let profile = Profile {
            name: "Grace".into(),
            age: 85,
        };
        let bytes = codec.encode(&profile).unwrap();
        let decoded: Profile = codec.decode(&bytes).unwrap();
        assert_eq!(decoded, profile);
    }

    #[test]
    fn malformed_input_is_decoding_error() {
        let result: CodecResult<Profile> = JsonCodec::new().decode(b"{\"name\":");
        assert!(matches!(result, Err(CodecError::DecodingFailed { .. })));
    }

    #[test]
    fn schema_mismatch_is_decoding_error() {
        let result: CodecResult<Profile> = JsonCodec::new().decode(br#"{"name":1}"#);
        assert!(matches!(result, Err(CodecError::DecodingFailed { .. })));
    }

    #[test]
    fn non_string_map_keys_fail_to_encode() {
        let mut map = BTreeMap::new();
        map.insert((1u8, 2u8), 3u8);

        let result = JsonCodec::new().encode(&map);
        assert!(matches!(result, Err(CodecError::EncodingFailed { .. })));
        assert!(result.unwrap_err().is_encoding());
    }
}
