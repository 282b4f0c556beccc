//! # prefkv Core
//!
//! Typed entries over a persistent key-value store.
//!
//! This crate provides:
//! - [`TypedEntry<T>`] for reading and writing one key as a Rust type
//! - JSON (or any [`Decoder`]/[`Encoder`]) accessors for structured values
//! - Store-wide enumeration and bulk deletion in [`bulk`]
//! - Explicit key generation in [`random_key`]
//!
//! ## Example
//!
//! ```rust
//! use prefkv_core::TypedEntry;
//! use prefkv_storage::InMemoryStore;
//! use serde::{Deserialize, Serialize};
//! use std::sync::Arc;
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Window {
//!     width: u32,
//!     height: u32,
//! }
//!
//! let store = Arc::new(InMemoryStore::new());
//! let window = TypedEntry::<Window>::new(store, "ui.window");
//!
//! window.save_encoded_value(&Window { width: 800, height: 600 }).unwrap();
//! assert_eq!(window.decoded_value(), Some(Window { width: 800, height: 600 }));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod bulk;
mod config;
mod convert;
mod entry;
mod error;
mod key;

pub use config::Config;
pub use convert::{FromStoreValue, IntoStoreValue};
pub use entry::{Entry, TypedEntry};
pub use error::{CoreError, CoreResult};
pub use key::{random_key, random_key_with_prefix};

// Re-export collaborator crates so callers need only one dependency
pub use prefkv_codec::{CborCodec, CodecError, Decoder, Encoder, JsonCodec};
pub use prefkv_storage::{
    FileStore, InMemoryStore, KeyValueStore, StorageError, StoreHandle, StoreValue,
};
