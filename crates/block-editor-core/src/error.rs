//! Host boundary errors.
//!
//! Editing operations never fail: invalid requests are ignored. Only decoding host-supplied
//! JSON (configuration, token specs) can produce an error.

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while decoding host-supplied input.
pub enum HostError {
    #[error("JSON parse error: {0}")]
    /// The input was not valid JSON for the expected shape.
    Json(#[from] serde_json::Error),

    #[error("invalid value for '{field}': {message}")]
    /// A field decoded but its value is unusable.
    InvalidConfig {
        /// The offending field name (camelCase, as the host spells it).
        field: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}
