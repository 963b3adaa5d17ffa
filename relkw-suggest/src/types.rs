//! Core types: engine identification, per-query records, and the
//! aggregated result handed to exporters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SuggestError;

/// Search engines whose suggestion APIs are queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Naver autocomplete (`ac.search.naver.com`), grouped-array payload.
    Naver,
    /// Daum autocomplete (`vmsuggest.search.daum.net`), keyword-object payload.
    Daum,
}

impl Engine {
    /// Returns the human-readable name of this engine.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Naver => "Naver",
            Self::Daum => "Daum",
        }
    }

    /// Localized source label written next to each exported suggestion.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Naver => "네이버",
            Self::Daum => "다음",
        }
    }

    /// Substring that routes a suggestion to this engine during aggregation.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Naver => "naver",
            Self::Daum => "daum",
        }
    }

    /// `Referer` header the engine's endpoint expects.
    pub fn referer(&self) -> &'static str {
        match self {
            Self::Naver => "https://www.naver.com/",
            Self::Daum => "https://www.daum.net/",
        }
    }

    /// Returns all engines in query order.
    pub fn all() -> &'static [Engine] {
        &[Self::Naver, Self::Daum]
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Engine {
    type Err = SuggestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naver" => Ok(Self::Naver),
            "daum" => Ok(Self::Daum),
            _ => Err(SuggestError::UnsupportedEngine(s.to_string())),
        }
    }
}

/// Suggestions decoded from one engine's response to one keyword.
///
/// `keywords` holds raw suggestion text in response order; nothing is
/// deduplicated or classified at this stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRecord {
    /// Engine that produced the response.
    pub engine: Engine,
    /// Keyword that was queried.
    pub query: String,
    /// Suggestion strings extracted from the response.
    pub keywords: Vec<String>,
}

impl SuggestionRecord {
    pub fn new(engine: Engine, query: impl Into<String>, keywords: Vec<String>) -> Self {
        Self {
            engine,
            query: query.into(),
            keywords,
        }
    }
}

/// Deduplicated, classified suggestions for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedResult {
    /// Suggestions attributed to Naver (plus every unmarked suggestion).
    pub naver: Vec<String>,
    /// Suggestions attributed to Daum (plus every unmarked suggestion).
    pub daum: Vec<String>,
}

impl AggregatedResult {
    /// Suggestions attributed to `engine`.
    pub fn for_engine(&self, engine: Engine) -> &[String] {
        match engine {
            Engine::Naver => &self.naver,
            Engine::Daum => &self.daum,
        }
    }

    /// Number of exported rows (unmarked suggestions count twice).
    pub fn total(&self) -> usize {
        self.naver.len() + self.daum.len()
    }

    pub fn is_empty(&self) -> bool {
        self.naver.is_empty() && self.daum.is_empty()
    }
}
