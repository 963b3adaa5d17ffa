//! Error types for the relkw run pipeline.

use relkw_suggest::SuggestError;

/// Top-level error type for a collection run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The keyword list could not be read. Fatal before any fetch.
    #[error("keyword source error: {0}")]
    KeywordSource(String),

    /// The aggregated result could not be written.
    #[error("export error: {0}")]
    Export(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Suggestion fetch or decode error.
    #[error(transparent)]
    Suggest(#[from] SuggestError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, RunError>;
