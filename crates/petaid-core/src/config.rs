//! Application Configuration
//!
//! A CSR bundle has no runtime environment, so overrides are read at compile
//! time (`PETAID_PREDICT_URL`, `PETAID_LOG_LEVEL`) and fall back to defaults.

use std::str::FromStr;

use log::LevelFilter;
use thiserror::Error;
use url::Url;

pub const DEFAULT_PREDICT_URL: &str = "http://127.0.0.1:5000/predict";
pub const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid prediction URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("invalid log level {0:?}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Validated absolute http(s) URL
    pub predict_url: String,
    pub notice_timeout_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            predict_url: DEFAULT_PREDICT_URL.to_string(),
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Build from optional overrides; `None` keeps the default
    pub fn from_values(
        predict_url: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = predict_url.map(str::trim).filter(|s| !s.is_empty()) {
            config.predict_url = validate_url(raw)?;
        }
        if let Some(raw) = log_level.map(str::trim).filter(|s| !s.is_empty()) {
            config.log_level = LevelFilter::from_str(raw)
                .map_err(|_| ConfigError::InvalidLogLevel(raw.to_string()))?;
        }
        Ok(config)
    }

    /// Overrides baked in at build time
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("PETAID_PREDICT_URL"), option_env!("PETAID_LOG_LEVEL"))
    }
}

fn validate_url(raw: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url.to_string()),
        other => Err(invalid(format!("unsupported scheme {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None).unwrap();
        assert_eq!(config.predict_url, DEFAULT_PREDICT_URL);
        assert_eq!(config.notice_timeout_ms, 4000);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config =
            AppConfig::from_values(Some("https://vet.example.com/api/predict"), Some("debug"))
                .unwrap();
        assert_eq!(config.predict_url, "https://vet.example.com/api/predict");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            AppConfig::from_values(Some("not a url"), None),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            AppConfig::from_values(Some("ftp://host/predict"), None),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert_eq!(
            AppConfig::from_values(None, Some("loud")),
            Err(ConfigError::InvalidLogLevel("loud".into()))
        );
    }
}
