//! Run configuration, loaded from TOML with per-field defaults.

use std::path::{Path, PathBuf};

use relkw_suggest::SuggestConfig;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RunError};

/// Output artifact format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Two-column spreadsheet (`result_<millis>.xlsx`).
    #[default]
    Xlsx,
    /// `{"naver": [...], "daum": [...]}` document (`result_<millis>.json`).
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Json => "json",
        }
    }
}

/// Configuration for one collection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Newline-delimited keyword list.
    pub input: PathBuf,
    /// Directory the result file is written to.
    pub output_dir: PathBuf,
    /// Directory holding `error.log` and `app.log`.
    pub log_dir: PathBuf,
    /// Result file format.
    pub format: OutputFormat,
    /// Endpoint and engine settings.
    pub suggest: SuggestConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.txt"),
            output_dir: PathBuf::from("."),
            log_dir: PathBuf::from("."),
            format: OutputFormat::default(),
            suggest: SuggestConfig::default(),
        }
    }
}

impl RunConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| RunError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| RunError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates the run settings and the nested suggestion settings.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Config`] for an empty input path, or the
    /// suggestion config error wrapped in [`RunError::Suggest`].
    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(RunError::Config("input path must not be empty".into()));
        }
        self.suggest.validate()?;
        Ok(())
    }
}
