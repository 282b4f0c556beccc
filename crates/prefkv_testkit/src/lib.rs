//! # prefkv Testkit
//!
//! Test utilities for prefkv.
//!
//! This crate provides:
//! - Isolated, disposable stores for each test case
//! - Property-based test generators using proptest
//! - A model harness that checks a store against an expected map
//!
//! ## Usage
//!
//! ```rust
//! use prefkv_testkit::prelude::*;
//! use prefkv_core::TypedEntry;
//!
//! with_memory_store(|store| {
//!     let entry = TypedEntry::<i64>::new(store, "count");
//!     entry.set(1).unwrap();
//!     assert_eq!(entry.value(), Some(1));
//! });
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod harness;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::harness::*;
}

pub use fixtures::*;
pub use generators::*;
pub use harness::*;
