//! relkw: related-keyword collection from Naver and Daum.
//!
//! Reads a keyword list, asks both autocomplete services for suggestions on
//! every keyword, merges the answers into one attributed set, and writes the
//! set to a spreadsheet.
//!
//! # Architecture
//!
//! - **Keyword source**: newline-delimited text file ([`keywords`])
//! - **Fetch, decode, aggregate**: the `relkw-suggest` workspace crate
//! - **Export**: `.xlsx` or JSON artifact per run ([`export`])
//! - **Run logs**: append-only error and summary logs ([`run_log`])
//! - **Pipeline**: sequential driver tying the above together ([`pipeline`])

pub mod config;
pub mod error;
pub mod export;
pub mod keywords;
pub mod pipeline;
pub mod run_log;

pub use config::{OutputFormat, RunConfig};
pub use error::{Result, RunError};
pub use export::{Exporter, JsonExporter, XlsxExporter, exporter_for};
pub use pipeline::{Collected, RunOutcome, collect_records, run};
pub use run_log::{RunLog, RunLogger};
