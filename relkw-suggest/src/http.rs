//! Shared HTTP client for the suggestion endpoints.
//!
//! Provides a [`reqwest::Client`] carrying the configured browser
//! User-Agent. Requests are stateless: no cookie store is kept.

use std::time::Duration;

use url::Url;

use crate::config::SuggestConfig;
use crate::error::SuggestError;
use crate::types::Engine;

/// Content type the browser widgets send with their GET requests.
pub(crate) const JSONP_CONTENT_TYPE: &str = "application/javascript; charset=UTF-8";

/// Build a [`reqwest::Client`] configured for the suggestion endpoints.
///
/// A timeout is only applied when `config.timeout_seconds` is set.
///
/// # Errors
///
/// Returns [`SuggestError::Transport`] if the client cannot be constructed.
pub fn build_client(config: &SuggestConfig) -> Result<reqwest::Client, SuggestError> {
    let mut builder = reqwest::Client::builder()
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(10));

    if let Some(secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder
        .build()
        .map_err(|e| SuggestError::Transport(format!("failed to build HTTP client: {e}")))
}

/// Issue a GET for `engine` and return the response body as text.
///
/// Sends the engine's `Referer`. Non-2xx statuses are rejected only when
/// `reject_error_status` is set; otherwise the body is passed through.
///
/// # Errors
///
/// Returns [`SuggestError::Transport`] on connection failure, a rejected
/// status, or an unreadable body.
pub(crate) async fn get_envelope(
    client: &reqwest::Client,
    engine: Engine,
    url: Url,
    reject_error_status: bool,
) -> Result<String, SuggestError> {
    let response = client
        .get(url)
        .header(reqwest::header::REFERER, engine.referer())
        .header(reqwest::header::CONTENT_TYPE, JSONP_CONTENT_TYPE)
        .send()
        .await
        .map_err(|e| SuggestError::Transport(format!("{engine} request failed: {}", e.without_url())))?;

    let status = response.status();
    let response = if reject_error_status {
        response
            .error_for_status()
            .map_err(|e| SuggestError::Transport(format!("{engine} HTTP error: {}", e.without_url())))?
    } else {
        if !status.is_success() {
            tracing::warn!(%engine, %status, "passing through non-success response");
        }
        response
    };

    let body = response
        .text()
        .await
        .map_err(|e| SuggestError::Transport(format!("{engine} response read failed: {}", e.without_url())))?;

    tracing::trace!(%engine, bytes = body.len(), "suggestion response received");
    Ok(body)
}
