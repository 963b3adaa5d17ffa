//! # relkw-suggest
//!
//! Related-keyword ("autocomplete") collection from the Naver and Daum
//! suggestion APIs.
//!
//! ## Design
//!
//! - Both endpoints answer with JSONP; [`envelope`] strips the callback
//!   wrapper and parses the inner JSON against the engine's own schema
//! - The two schemas are one closed sum type, [`envelope::EnginePayload`]
//! - [`aggregate`] merges every record of a run, deduplicates by exact text
//!   and attributes each suggestion by the engine name it contains
//! - Fetching sits behind [`SuggestionFetcher`] so callers can substitute
//!   canned payloads
//!
//! Requests are issued one at a time; nothing here spawns tasks.

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod engines;
pub mod envelope;
pub mod error;
pub mod http;
pub mod types;

pub use aggregate::{aggregate, classify, Attribution};
pub use config::SuggestConfig;
pub use engine::{HttpFetcher, SuggestionFetcher};
pub use envelope::{decode, strip_envelope, EnginePayload};
pub use error::{Result, SuggestError};
pub use types::{AggregatedResult, Engine, SuggestionRecord};

/// Fetch and decode the suggestions `engine` offers for `keyword`.
///
/// # Errors
///
/// Returns [`SuggestError::Transport`] if the fetch fails, or
/// [`SuggestError::MalformedEnvelope`] / [`SuggestError::SchemaMismatch`]
/// if the payload cannot be decoded.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> relkw_suggest::Result<()> {
/// use relkw_suggest::{Engine, HttpFetcher, SuggestConfig};
///
/// let fetcher = HttpFetcher::new(SuggestConfig::default())?;
/// let record = relkw_suggest::suggest(&fetcher, Engine::Naver, "날씨").await?;
/// for keyword in &record.keywords {
///     println!("{keyword}");
/// }
/// # Ok(())
/// # }
/// ```
pub async fn suggest<F: SuggestionFetcher>(
    fetcher: &F,
    engine: Engine,
    keyword: &str,
) -> Result<SuggestionRecord> {
    let raw = fetcher.fetch(engine, keyword).await?;
    decode(&raw, engine, keyword)
}
