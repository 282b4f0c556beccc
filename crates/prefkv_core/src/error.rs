//! Error types for prefkv core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while reading or writing typed entries.
///
/// A missing key or a stored value of the wrong type is never an error;
/// those surface as `None` from the read accessors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The store failed to persist a write.
    #[error("storage error: {0}")]
    Storage(#[from] prefkv_storage::StorageError),

    /// A structured value could not be encoded or decoded.
    #[error("codec error: {0}")]
    Codec(#[from] prefkv_codec::CodecError),
}

impl CoreError {
    /// Returns `true` if this error came from encoding a value.
    pub fn is_encoding(&self) -> bool {
        matches!(self, Self::Codec(e) if e.is_encoding())
    }

    /// Returns `true` if this error came from decoding stored bytes.
    pub fn is_decoding(&self) -> bool {
        matches!(self, Self::Codec(e) if !e.is_encoding())
    }
}
