//! Fetcher abstraction over the suggestion endpoints.
//!
//! [`SuggestionFetcher`] returns the raw envelope text for one engine and
//! one keyword. [`HttpFetcher`] is the network implementation; the run
//! pipeline is generic over the trait so it can be driven by canned
//! payloads.

use crate::config::SuggestConfig;
use crate::engines::{daum, naver};
use crate::error::SuggestError;
use crate::http;
use crate::types::Engine;

/// A source of raw suggestion payloads.
///
/// All implementations must be `Send + Sync`.
pub trait SuggestionFetcher: Send + Sync {
    /// Fetch the raw (still wrapped) response for `keyword` from `engine`.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestError::Transport`] if the request fails, or
    /// [`SuggestError::Config`] if the request cannot be built.
    fn fetch(
        &self,
        engine: Engine,
        keyword: &str,
    ) -> impl std::future::Future<Output = Result<String, SuggestError>> + Send;
}

/// Fetches suggestions over HTTP with one shared client.
pub struct HttpFetcher {
    client: reqwest::Client,
    config: SuggestConfig,
}

impl HttpFetcher {
    /// Validate `config` and build the shared client.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestError::Config`] for an invalid configuration or
    /// [`SuggestError::Transport`] if the client cannot be built.
    pub fn new(config: SuggestConfig) -> Result<Self, SuggestError> {
        config.validate()?;
        let client = http::build_client(&config)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }
}

impl SuggestionFetcher for HttpFetcher {
    async fn fetch(&self, engine: Engine, keyword: &str) -> Result<String, SuggestError> {
        tracing::trace!(%engine, keyword, "fetching suggestions");

        let endpoint = self.config.endpoint(engine);
        let url = match engine {
            Engine::Naver => naver::request_url(endpoint, keyword)?,
            Engine::Daum => {
                let now_ms = chrono::Utc::now().timestamp_millis();
                daum::request_url(endpoint, keyword, now_ms)?
            }
        };

        http::get_envelope(&self.client, engine, url, self.config.reject_error_status).await
    }
}
