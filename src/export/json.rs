//! JSON export: `{"naver": [...], "daum": [...]}`, pretty-printed.

use std::path::{Path, PathBuf};

use relkw_suggest::AggregatedResult;

use super::{Exporter, new_result_path};
use crate::config::OutputFormat;
use crate::error::{Result, RunError};

/// Writes `result_<millis>.json` into an output directory.
#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

impl JsonExporter {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
        }
    }
}

impl Exporter for JsonExporter {
    fn export(&self, result: &AggregatedResult) -> Result<PathBuf> {
        let path = new_result_path(&self.output_dir, OutputFormat::Json)?;
        let body = serde_json::to_string_pretty(result)
            .map_err(|e| RunError::Export(format!("JSON encode error: {e}")))?;
        std::fs::write(&path, body)?;
        tracing::info!(path = %path.display(), rows = result.total(), "JSON result written");
        Ok(path)
    }
}
