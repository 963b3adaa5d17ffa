//! Daum autocomplete - keyword-object JSONP payload.
//!
//! The callback name embeds a client-side millisecond timestamp so that
//! repeated queries never share a cached response.

use url::Url;

use crate::error::SuggestError;

/// Callback name for a request issued at `timestamp_ms`.
pub fn callback_name(timestamp_ms: i64) -> String {
    format!("jsonp{timestamp_ms}")
}

/// Build the request URL for `keyword` issued at `timestamp_ms`.
///
/// # Errors
///
/// Returns [`SuggestError::Config`] if `endpoint` is not a valid URL.
pub fn request_url(endpoint: &str, keyword: &str, timestamp_ms: i64) -> Result<Url, SuggestError> {
    let mut url = Url::parse(endpoint)
        .map_err(|e| SuggestError::Config(format!("invalid Daum endpoint {endpoint:?}: {e}")))?;
    url.query_pairs_mut()
        .append_pair("q", keyword)
        .append_pair("callback", &callback_name(timestamp_ms));
    Ok(url)
}
