//! Key generation helpers.
//!
//! Entries never invent their own keys. Callers that need a unique key ask
//! for one here and pass it in explicitly.

use uuid::Uuid;

/// Returns a fresh random key (a hyphenated UUID v4).
#[must_use]
pub fn random_key() -> String {
    Uuid::new_v4().to_string()
}

/// Returns a fresh random key under `prefix`, e.g. `drafts.5f0c...`.
#[must_use]
pub fn random_key_with_prefix(prefix: &str) -> String {
    format!("{prefix}.{}", Uuid::new_v4())
}
