//! Codec accessors for structured values.

use crate::entry::TypedEntry;
use crate::error::{CoreError, CoreResult};
use prefkv_codec::{Decoder, Encoder};
use prefkv_storage::StoreValue;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::panic::Location;
use tracing::warn;

const COMPONENT: &str = "prefkv";

impl<T: DeserializeOwned> TypedEntry<T> {
    /// Decodes the stored blob with the default JSON codec.
    ///
    /// Returns `None` if nothing is stored, if the stored value is not a
    /// byte blob, or if decoding fails. Decode failures are logged.
    #[track_caller]
    pub fn decoded_value(&self) -> Option<T> {
        self.decoded_value_with(&self.config().codec())
    }

    /// Decodes the stored blob with `decoder`, logging and discarding
    /// decode failures.
    #[track_caller]
    pub fn decoded_value_with<D: Decoder>(&self, decoder: &D) -> Option<T> {
        match self.try_decoded_value_with(decoder) {
            Ok(value) => value,
            Err(error) => {
                self.log_failure("decode", &error, Location::caller());
                None
            }
        }
    }

    /// Decodes the stored blob, or returns `default` if there is none.
    #[track_caller]
    pub fn decoded_value_or(&self, default: T) -> T {
        self.decoded_value().unwrap_or(default)
    }

    /// Decodes the stored blob with the default JSON codec.
    ///
    /// Like [`decoded_value`](Self::decoded_value) but returns decode
    /// failures to the caller instead of logging them.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Codec`] if the stored bytes cannot be decoded
    /// into `T`.
    pub fn try_decoded_value(&self) -> CoreResult<Option<T>> {
        self.try_decoded_value_with(&self.config().codec())
    }

    /// Decodes the stored blob with `decoder`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Codec`] if the stored bytes cannot be decoded
    /// into `T`.
    pub fn try_decoded_value_with<D: Decoder>(&self, decoder: &D) -> CoreResult<Option<T>> {
        let Some(bytes) = self.raw_value().and_then(StoreValue::into_bytes) else {
            return Ok(None);
        };
        Ok(Some(decoder.decode(&bytes)?))
    }
}

impl<T: Serialize> TypedEntry<T> {
    /// Encodes `value` with the default JSON codec and stores the bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Codec`] if `value` cannot be encoded (the
    /// failure is also logged), or a storage error if the flush fails.
    #[track_caller]
    pub fn save_encoded_value(&self, value: &T) -> CoreResult<()> {
        self.save_encoded_value_with(value, &self.config().codec())
    }

    /// Encodes `value` with `encoder` and stores the bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Codec`] if `value` cannot be encoded (the
    /// failure is also logged), or a storage error if the flush fails.
    #[track_caller]
    pub fn save_encoded_value_with<E: Encoder>(&self, value: &T, encoder: &E) -> CoreResult<()> {
        let bytes = match encoder.encode(value) {
            Ok(bytes) => bytes,
            Err(e) => {
                let error = CoreError::from(e);
                self.log_failure("encode", &error, Location::caller());
                return Err(error);
            }
        };
        self.write(Some(StoreValue::Bytes(bytes)))
    }
}

impl<T> TypedEntry<T> {
    fn log_failure(&self, verb: &str, error: &CoreError, caller: &Location<'_>) {
        warn!(
            component = COMPONENT,
            key = %self.key(),
            type_name = std::any::type_name::<T>(),
            caller = %caller,
            error = %error,
            "failed to {} value",
            verb
        );
    }
}
