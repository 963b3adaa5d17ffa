//! The collection run: keywords → suggestions → aggregate → export.
//!
//! Keywords are processed one at a time and each configured engine is
//! queried in order before moving on. A fetch or decode failure is written
//! to the run log and skipped; it never blocks the other engine or the
//! remaining keywords. Only an unreadable keyword list or a failed export
//! ends the run with an error. An unreadable keyword list is reported in
//! the run log alone, below the console's default `info` level.

use std::panic::Location;
use std::path::PathBuf;

use relkw_suggest::{Engine, SuggestionFetcher, SuggestionRecord, aggregate, suggest};

use crate::config::RunConfig;
use crate::error::Result;
use crate::export::Exporter;
use crate::keywords::read_keywords;
use crate::run_log::RunLogger;

/// Records gathered for a keyword list.
#[derive(Debug, Clone, Default)]
pub struct Collected {
    /// One record per successful (keyword, engine) call, in call order.
    pub records: Vec<SuggestionRecord>,
    /// Number of (keyword, engine) calls that failed.
    pub failures: usize,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// File the result was written to.
    pub output: PathBuf,
    /// Keywords read from the input.
    pub keywords: usize,
    /// Failed (keyword, engine) calls.
    pub failures: usize,
    /// Exported rows across both engines.
    pub total: usize,
}

/// Query every engine for every keyword, sequentially.
pub async fn collect_records<F, L>(
    fetcher: &F,
    engines: &[Engine],
    keywords: &[String],
    log: &mut L,
) -> Collected
where
    F: SuggestionFetcher,
    L: RunLogger + ?Sized,
{
    let mut collected = Collected::default();

    for keyword in keywords {
        for &engine in engines {
            match suggest(fetcher, engine, keyword).await {
                Ok(record) => {
                    tracing::debug!(%engine, keyword = %keyword, count = record.keywords.len(), "record collected");
                    collected.records.push(record);
                }
                Err(err) => {
                    tracing::warn!(%engine, error = %err, "suggestion call failed");
                    log.error(&format!("{engine} {keyword:?}: {err}"), Location::caller());
                    collected.failures += 1;
                }
            }
        }
    }

    collected
}

/// Run one collection with the given collaborators.
///
/// # Errors
///
/// Returns [`crate::RunError::Config`] / [`crate::RunError::Suggest`] for an
/// invalid configuration, [`crate::RunError::KeywordSource`] if the keyword
/// list cannot be read (before any fetch), or the exporter's error. The
/// latter two are also written to the run log.
pub async fn run<F, L>(
    config: &RunConfig,
    fetcher: &F,
    exporter: &dyn Exporter,
    log: &mut L,
) -> Result<RunOutcome>
where
    F: SuggestionFetcher,
    L: RunLogger + ?Sized,
{
    config.validate()?;

    let keywords = match read_keywords(&config.input) {
        Ok(keywords) => keywords,
        Err(err) => {
            // Console stays silent; error.log is the only report.
            tracing::debug!(error = %err, "cannot read keyword list");
            log.error(&err.to_string(), Location::caller());
            return Err(err);
        }
    };

    let collected = collect_records(fetcher, &config.suggest.engines, &keywords, log).await;
    let result = aggregate(&collected.records);
    if result.is_empty() && !keywords.is_empty() {
        tracing::warn!(keywords = keywords.len(), "no suggestions collected");
    }

    let output = match exporter.export(&result) {
        Ok(path) => path,
        Err(err) => {
            tracing::error!(error = %err, "export failed");
            log.error(&err.to_string(), Location::caller());
            return Err(err);
        }
    };

    let total = result.total();
    log.summary(total);
    tracing::info!(
        keywords = keywords.len(),
        failures = collected.failures,
        total,
        "run complete"
    );

    Ok(RunOutcome {
        output,
        keywords: keywords.len(),
        failures: collected.failures,
        total,
    })
}
