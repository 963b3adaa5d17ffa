//! Suggestion fetch configuration with production defaults.
//!
//! [`SuggestConfig`] controls which engines are queried, where their
//! endpoints live, and how the HTTP client identifies itself.

use serde::{Deserialize, Serialize};

use crate::error::SuggestError;
use crate::types::Engine;

/// Production Naver autocomplete endpoint.
pub const NAVER_ENDPOINT: &str = "https://ac.search.naver.com/nx/ac";

/// Production Daum autocomplete endpoint.
pub const DAUM_ENDPOINT: &str = "https://vmsuggest.search.daum.net/v2/sushi/pc/get";

/// Desktop Chrome User-Agent the endpoints accept without a challenge.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.5735.110 Safari/537.36";

/// Configuration for suggestion fetching.
///
/// Use [`Default::default()`] for the production endpoints, or override
/// individual fields (tests point the endpoints at a mock server).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Engines to query for every keyword, in order.
    pub engines: Vec<Engine>,
    /// Naver autocomplete endpoint (without query string).
    pub naver_endpoint: String,
    /// Daum autocomplete endpoint (without query string).
    pub daum_endpoint: String,
    /// User-Agent sent with every request.
    pub user_agent: String,
    /// Per-request timeout in seconds. `None` leaves the transport default.
    pub timeout_seconds: Option<u64>,
    /// Treat non-2xx responses as transport errors. When `false`, any body
    /// that arrives is handed to the decoder regardless of status.
    pub reject_error_status: bool,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            engines: Engine::all().to_vec(),
            naver_endpoint: NAVER_ENDPOINT.to_string(),
            daum_endpoint: DAUM_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: None,
            reject_error_status: true,
        }
    }
}

impl SuggestConfig {
    /// Endpoint configured for `engine`.
    pub fn endpoint(&self, engine: Engine) -> &str {
        match engine {
            Engine::Naver => &self.naver_endpoint,
            Engine::Daum => &self.daum_endpoint,
        }
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `engines` must not be empty or contain duplicates
    /// - `timeout_seconds`, when set, must be greater than 0
    /// - endpoints and `user_agent` must not be blank
    pub fn validate(&self) -> Result<(), SuggestError> {
        if self.engines.is_empty() {
            return Err(SuggestError::Config(
                "at least one engine must be enabled".into(),
            ));
        }
        for (i, engine) in self.engines.iter().enumerate() {
            if self.engines[..i].contains(engine) {
                return Err(SuggestError::Config(format!(
                    "engine {engine} listed more than once"
                )));
            }
        }
        if self.timeout_seconds == Some(0) {
            return Err(SuggestError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        for engine in &self.engines {
            if self.endpoint(*engine).trim().is_empty() {
                return Err(SuggestError::Config(format!(
                    "endpoint for {engine} must not be empty"
                )));
            }
        }
        if self.user_agent.trim().is_empty() {
            return Err(SuggestError::Config("user_agent must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_production() {
        let config = SuggestConfig::default();
        assert_eq!(config.engines, vec![Engine::Naver, Engine::Daum]);
        assert_eq!(config.endpoint(Engine::Naver), NAVER_ENDPOINT);
        assert_eq!(config.endpoint(Engine::Daum), DAUM_ENDPOINT);
        assert!(config.timeout_seconds.is_none());
        assert!(config.reject_error_status);
        assert!(config.user_agent.contains("Chrome/114"));
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(SuggestConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_engines_rejected() {
        let config = SuggestConfig {
            engines: vec![],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("engine"));
    }

    #[test]
    fn duplicate_engines_rejected() {
        let config = SuggestConfig {
            engines: vec![Engine::Daum, Engine::Daum],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = SuggestConfig {
            timeout_seconds: Some(0),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn blank_endpoint_rejected_only_when_engine_enabled() {
        let config = SuggestConfig {
            daum_endpoint: " ".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SuggestConfig {
            engines: vec![Engine::Naver],
            daum_endpoint: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_user_agent_rejected() {
        let config = SuggestConfig {
            user_agent: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: SuggestConfig =
            serde_json::from_str(r#"{"engines":["daum"],"timeout_seconds":5}"#).expect("parse");
        assert_eq!(config.engines, vec![Engine::Daum]);
        assert_eq!(config.timeout_seconds, Some(5));
        assert_eq!(config.naver_endpoint, NAVER_ENDPOINT);
    }
}
