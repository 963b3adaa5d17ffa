//! Naver autocomplete - grouped-array JSONP payload.
//!
//! The endpoint wants a fixed set of protocol flags alongside the query and
//! always answers through the `_jsonp_4` callback.

use url::Url;

use crate::error::SuggestError;

/// Callback name sent with every Naver request.
pub const CALLBACK: &str = "_jsonp_4";

/// Protocol flags the Naver widget sends after `q`.
const FIXED_PARAMS: &[(&str, &str)] = &[
    ("con", "1"),
    ("frm", "nv"),
    ("ans", "2"),
    ("r_format", "json"),
    ("r_enc", "UTF-8"),
    ("r_unicode", "0"),
    ("t_koreng", "1"),
    ("run", "2"),
    ("rev", "4"),
    ("q_enc", "UTF-8"),
    ("st", "100"),
    ("_callback", CALLBACK),
];

/// Build the request URL for `keyword`.
///
/// # Errors
///
/// Returns [`SuggestError::Config`] if `endpoint` is not a valid URL.
pub fn request_url(endpoint: &str, keyword: &str) -> Result<Url, SuggestError> {
    let mut url = Url::parse(endpoint)
        .map_err(|e| SuggestError::Config(format!("invalid Naver endpoint {endpoint:?}: {e}")))?;
    url.query_pairs_mut()
        .append_pair("q", keyword)
        .extend_pairs(FIXED_PARAMS);
    Ok(url)
}
