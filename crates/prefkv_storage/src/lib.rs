//! # prefkv Storage
//!
//! Key-value store trait and implementations for prefkv.
//!
//! This crate provides the lowest-level abstraction for prefkv. Stores are
//! **untyped maps** from string keys to [`StoreValue`]s - they do not know
//! which Rust type a caller expects at a key.
//!
//! ## Design Principles
//!
//! - Stores are simple maps (get, set, remove, enumerate, flush)
//! - No knowledge of typed entries or codecs
//! - Must be `Send + Sync` so handles can be shared
//! - Durability is explicit: nothing is guaranteed on disk before `flush`
//!
//! ## Available Stores
//!
//! - [`InMemoryStore`] - For testing and ephemeral settings
//! - [`FileStore`] - For persistent settings in a snapshot file
//!
//! ## Example
//!
//! ```rust
//! use prefkv_storage::{InMemoryStore, KeyValueStore, StoreValue};
//!
//! let store = InMemoryStore::new();
//! store.set("greeting", StoreValue::from("hello"));
//! store.flush().unwrap();
//! assert_eq!(store.get("greeting").unwrap().as_text(), Some("hello"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod file;
mod format;
mod memory;
mod store;
mod value;

pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use format::FORMAT_VERSION;
pub use memory::InMemoryStore;
pub use store::{KeyValueStore, StoreHandle};
pub use value::StoreValue;
