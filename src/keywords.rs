//! Keyword source: a newline-delimited text file, one keyword per line.

use std::path::Path;

use crate::error::{Result, RunError};

/// Split `text` into keywords in line order.
///
/// Lines are trimmed (which also drops a trailing `\r`); blank lines are
/// skipped.
pub fn parse_keywords(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read the keyword list at `path`.
///
/// # Errors
///
/// Returns [`RunError::KeywordSource`] if the file cannot be read or is not
/// valid UTF-8.
pub fn read_keywords(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| RunError::KeywordSource(format!("{}: {e}", path.display())))?;
    let keywords = parse_keywords(&text);
    tracing::info!(path = %path.display(), count = keywords.len(), "keywords loaded");
    Ok(keywords)
}
