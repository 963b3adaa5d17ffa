//! Cross-engine deduplication and source attribution.
//!
//! Every suggestion from every record is merged into one set by exact
//! string equality. Each distinct suggestion is then attributed by its own
//! text, not by the engine that returned it: text containing `"naver"` goes
//! to Naver only, text containing `"daum"` goes to Daum only, and anything
//! else goes to both. A Daum suggestion reading "naver map" is therefore
//! exported under Naver.

use std::collections::HashSet;

use crate::types::{AggregatedResult, Engine, SuggestionRecord};

/// Where a suggestion is exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribution {
    /// Contains a single engine's marker.
    Only(Engine),
    /// Contains no marker.
    Both,
}

/// Attribute one suggestion by substring match on its text.
///
/// The Naver marker is checked first, so text naming both engines is
/// attributed to Naver. Matching is case-sensitive.
pub fn classify(suggestion: &str) -> Attribution {
    if suggestion.contains(Engine::Naver.marker()) {
        Attribution::Only(Engine::Naver)
    } else if suggestion.contains(Engine::Daum.marker()) {
        Attribution::Only(Engine::Daum)
    } else {
        Attribution::Both
    }
}

/// Merge `records` into one deduplicated, attributed result.
///
/// Suggestions are emitted in first-seen order across `records`, so the
/// same input always yields the same output. No records yields an empty
/// result.
pub fn aggregate(records: &[SuggestionRecord]) -> AggregatedResult {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut result = AggregatedResult::default();

    let suggestions = records
        .iter()
        .flat_map(|record| record.keywords.iter())
        .filter(|s| seen.insert(s.as_str()));

    for suggestion in suggestions {
        match classify(suggestion) {
            Attribution::Only(Engine::Naver) => result.naver.push(suggestion.clone()),
            Attribution::Only(Engine::Daum) => result.daum.push(suggestion.clone()),
            Attribution::Both => {
                result.naver.push(suggestion.clone());
                result.daum.push(suggestion.clone());
            }
        }
    }

    tracing::debug!(
        records = records.len(),
        distinct = seen.len(),
        naver = result.naver.len(),
        daum = result.daum.len(),
        "suggestions aggregated"
    );
    result
}
