//! Typed entry API.
//!
//! Provides `TypedEntry<T>` for type-safe access to one key of a store,
//! with raw accessors for natively storable types and codec accessors for
//! structured ones, plus the `Entry` record produced by enumeration.

mod codable;
mod record;
mod typed;

pub use record::Entry;
pub use typed::TypedEntry;
