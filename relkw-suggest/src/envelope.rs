//! JSONP envelope decoding.
//!
//! Both engines answer with `callback({...})`. The text between the first
//! `(` and the last `)` is parsed against the schema of the engine that was
//! queried, and the suggestion strings are pulled out of it.

use serde::Deserialize;

use crate::error::{Result, SuggestError};
use crate::types::{Engine, SuggestionRecord};

/// Naver response body.
///
/// `items` is a list of groups; each group is a list of entries; each entry
/// is a list of string fields whose first field is the suggestion text.
/// The other fields are unused and may be missing or `null`.
#[derive(Debug, Clone, Deserialize)]
pub struct NaverResponse {
    #[serde(default)]
    pub query: Option<Vec<String>>,
    #[serde(default)]
    pub answer: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub intend: Option<Vec<serde_json::Value>>,
    pub items: Vec<Vec<Vec<String>>>,
}

/// One Daum suggestion entry. Ranking metadata is kept only so that a
/// mistyped field is reported as a schema mismatch; `null` is accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct DaumSubkey {
    pub keyword: String,
    #[serde(default)]
    pub highlighted: Option<Vec<Vec<i64>>>,
    #[serde(default, rename = "metaCnt")]
    pub meta_cnt: Option<i64>,
    #[serde(default)]
    pub meta: Option<Vec<serde_json::Value>>,
}

/// Daum response body.
#[derive(Debug, Clone, Deserialize)]
pub struct DaumResponse {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub tltm: serde_json::Value,
    pub subkeys: Vec<DaumSubkey>,
}

/// A decoded payload, tagged by the schema it was parsed with.
#[derive(Debug, Clone)]
pub enum EnginePayload {
    Naver(NaverResponse),
    Daum(DaumResponse),
}

impl EnginePayload {
    /// Parse unwrapped JSON text with the schema for `engine`.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestError::SchemaMismatch`] carrying the serde diagnostic.
    pub fn parse(engine: Engine, json: &str) -> Result<Self> {
        let mismatch = |e: serde_json::Error| SuggestError::SchemaMismatch {
            engine,
            detail: e.to_string(),
        };
        match engine {
            Engine::Naver => serde_json::from_str(json).map(Self::Naver).map_err(mismatch),
            Engine::Daum => serde_json::from_str(json).map(Self::Daum).map_err(mismatch),
        }
    }

    /// Engine whose schema this payload was parsed with.
    pub fn engine(&self) -> Engine {
        match self {
            Self::Naver(_) => Engine::Naver,
            Self::Daum(_) => Engine::Daum,
        }
    }

    /// Suggestion strings in response order.
    ///
    /// Naver: first field of every entry, groups flattened in order; empty
    /// entries are skipped. Daum: the `keyword` of every subkey.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Naver(resp) => resp
                .items
                .iter()
                .flatten()
                .filter_map(|entry| entry.first().cloned())
                .collect(),
            Self::Daum(resp) => resp.subkeys.iter().map(|s| s.keyword.clone()).collect(),
        }
    }
}

/// Return the text strictly between the first `(` and the last `)`.
///
/// # Errors
///
/// Returns [`SuggestError::MalformedEnvelope`] if either parenthesis is
/// missing or the last `)` does not come after the first `(`.
pub fn strip_envelope(raw: &str) -> Result<&str> {
    let start = raw
        .find('(')
        .ok_or_else(|| SuggestError::MalformedEnvelope("no opening parenthesis".into()))?;
    let end = raw
        .rfind(')')
        .ok_or_else(|| SuggestError::MalformedEnvelope("no closing parenthesis".into()))?;
    if start >= end {
        return Err(SuggestError::MalformedEnvelope(
            "closing parenthesis precedes opening parenthesis".into(),
        ));
    }
    Ok(&raw[start + 1..end])
}

/// Decode one engine's raw response for `query` into a [`SuggestionRecord`].
///
/// # Errors
///
/// [`SuggestError::MalformedEnvelope`] or [`SuggestError::SchemaMismatch`].
pub fn decode(raw: &str, engine: Engine, query: &str) -> Result<SuggestionRecord> {
    let inner = strip_envelope(raw)?;
    let payload = EnginePayload::parse(engine, inner)?;
    let keywords = payload.suggestions();
    tracing::debug!(%engine, count = keywords.len(), "suggestions decoded");
    Ok(SuggestionRecord::new(payload.engine(), query, keywords))
}
