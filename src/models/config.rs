//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client behavior settings
    #[serde(default)]
    pub client: ClientConfig,

    /// Collection run settings
    #[serde(default)]
    pub collect: CollectConfig,

    /// Output location settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    ///
    /// `collect.top_period` and page numbers are deliberately not checked;
    /// the remote service decides what it accepts.
    pub fn validate(&self) -> Result<()> {
        if self.client.user_agent.trim().is_empty() {
            return Err(AppError::validation("client.user_agent is empty"));
        }
        if self.client.timeout_secs == 0 {
            return Err(AppError::validation("client.timeout_secs must be > 0"));
        }
        if Url::parse(&self.client.base_url).is_err() {
            return Err(AppError::validation(format!(
                "client.base_url is not a valid URL: {}",
                self.client.base_url
            )));
        }
        if self.output.dir.trim().is_empty() {
            return Err(AppError::validation("output.dir is empty"));
        }
        Ok(())
    }
}

/// HTTP client behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base origin of the forum
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Pause before each endpoint probe in milliseconds
    #[serde(default = "defaults::probe_delay")]
    pub probe_delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            probe_delay_ms: defaults::probe_delay(),
        }
    }
}

/// Collection run settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectConfig {
    /// Zero-based page for the latest-topics listing
    #[serde(default)]
    pub latest_page: u32,

    /// Period for the top-topics listing (passed through unvalidated)
    #[serde(default = "defaults::top_period")]
    pub top_period: String,

    /// Query for the search step
    #[serde(default = "defaults::search_query")]
    pub search_query: String,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            latest_page: 0,
            top_period: defaults::top_period(),
            search_query: defaults::search_query(),
        }
    }
}

/// Output location settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the output files are written to
    #[serde(default = "defaults::output_dir")]
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: defaults::output_dir(),
        }
    }
}

mod defaults {
    // Client defaults
    pub fn base_url() -> String {
        "https://linux.do".into()
    }
    pub fn user_agent() -> String {
        "ResearchBot/1.0 (+https://example.com/research)".into()
    }
    pub fn timeout() -> u64 {
        10
    }
    pub fn probe_delay() -> u64 {
        1000
    }

    // Collect defaults
    pub fn top_period() -> String {
        "daily".into()
    }
    pub fn search_query() -> String {
        "linux".into()
    }

    // Output defaults
    pub fn output_dir() -> String {
        ".".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.client.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.client.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let mut config = Config::default();
        config.client.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [client]
            probe_delay_ms = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.client.probe_delay_ms, 0);
        assert_eq!(config.client.base_url, "https://linux.do");
        assert_eq!(config.client.timeout_secs, 10);
        assert_eq!(config.collect.top_period, "daily");
        assert_eq!(config.output.dir, ".");
    }
}
