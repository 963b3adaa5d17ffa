//! Error types for the relkw-suggest crate.
//!
//! Display strings are stable so callers can log them verbatim into the
//! run error log. Keywords never appear in transport errors.

use crate::types::Engine;

/// Errors that can occur while fetching or decoding suggestions.
#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    /// The payload has no `(` ... `)` function-call wrapper.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// The wrapped JSON does not match the engine's response shape.
    #[error("schema mismatch for {engine}: {detail}")]
    SchemaMismatch {
        /// Engine whose schema was expected.
        engine: Engine,
        /// Underlying parser diagnostic.
        detail: String,
    },

    /// An engine name outside the supported set was requested.
    #[error("unsupported engine: {0}")]
    UnsupportedEngine(String),

    /// The HTTP request failed outright or returned a rejected status.
    #[error("transport error: {0}")]
    Transport(String),

    /// Invalid suggestion configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for relkw-suggest results.
pub type Result<T> = std::result::Result<T, SuggestError>;
