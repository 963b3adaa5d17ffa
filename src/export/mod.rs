//! Result exporters.
//!
//! An exporter writes one artifact per run into its output directory,
//! named `result_<unix-millis>.<ext>`, and returns the path it wrote.

pub mod json;
pub mod xlsx;

use std::path::{Path, PathBuf};

use relkw_suggest::{AggregatedResult, Engine};

use crate::config::OutputFormat;
use crate::error::Result;

pub use json::JsonExporter;
pub use xlsx::XlsxExporter;

/// Writes an [`AggregatedResult`] to a file.
pub trait Exporter: Send + Sync {
    /// Write `result` and return the path of the created file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RunError::Export`] or [`crate::RunError::Io`] if the
    /// file cannot be created or written.
    fn export(&self, result: &AggregatedResult) -> Result<PathBuf>;
}

/// Build the exporter for `format` writing into `output_dir`.
pub fn exporter_for(format: OutputFormat, output_dir: &Path) -> Box<dyn Exporter> {
    match format {
        OutputFormat::Xlsx => Box::new(XlsxExporter::new(output_dir)),
        OutputFormat::Json => Box::new(JsonExporter::new(output_dir)),
    }
}

/// `result_<timestamp_ms>.<extension>`.
pub fn result_file_name(extension: &str, timestamp_ms: i64) -> String {
    format!("result_{timestamp_ms}.{extension}")
}

/// Path for a new result file in `dir`, creating `dir` if needed.
pub(crate) fn new_result_path(dir: &Path, format: OutputFormat) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let now_ms = chrono::Utc::now().timestamp_millis();
    Ok(dir.join(result_file_name(format.extension(), now_ms)))
}

/// Exported rows in output order: every Naver row, then every Daum row.
pub fn rows(result: &AggregatedResult) -> impl Iterator<Item = (&'static str, &str)> {
    Engine::all().iter().flat_map(move |engine| {
        result
            .for_engine(*engine)
            .iter()
            .map(move |keyword| (engine.label(), keyword.as_str()))
    })
}
