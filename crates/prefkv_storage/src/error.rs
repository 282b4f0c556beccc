//! Error types for store operations.

use std::io;
use thiserror::Error;

/// Result type for store operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur while loading or flushing a store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The store file could not be parsed.
    #[error("store corrupted: {0}")]
    Corrupted(String),

    /// The store file was written by an incompatible format version.
    #[error("unsupported store format version {found} (expected {expected})")]
    UnsupportedVersion {
        /// The version found in the file.
        found: u64,
        /// The version this build reads and writes.
        expected: u64,
    },
}

impl StorageError {
    /// Creates a corruption error.
    pub fn corrupted(message: impl Into<String>) -> Self {
        Self::Corrupted(message.into())
    }
}
