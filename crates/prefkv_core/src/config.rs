//! Entry configuration.

use prefkv_codec::JsonCodec;

/// Configuration shared by typed entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Whether to flush the store after every write (safer but slower).
    pub sync_on_write: bool,

    /// Whether the default JSON encoder pretty-prints.
    pub pretty_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sync_on_write: true,
            pretty_json: false,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to flush after every write.
    #[must_use]
    pub const fn sync_on_write(mut self, value: bool) -> Self {
        self.sync_on_write = value;
        self
    }

    /// Sets whether the default encoder pretty-prints.
    #[must_use]
    pub const fn pretty_json(mut self, value: bool) -> Self {
        self.pretty_json = value;
        self
    }

    /// Returns the default codec for structured values.
    #[must_use]
    pub const fn codec(&self) -> JsonCodec {
        if self.pretty_json {
            JsonCodec::pretty()
        } else {
            JsonCodec::new()
        }
    }
}
