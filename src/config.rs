//! Configuration management for Webhelm

use crate::{Error, Result};
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Session configuration
///
/// Defaults mirror the conventional WebDriver setup: a Chromedriver endpoint
/// on localhost and the settle delays the facade applies after navigation,
/// clicks, and scrolls.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// WebDriver server endpoint
    pub webdriver_url: String,

    /// Driver-level implicit wait applied to element lookups, in milliseconds
    pub implicit_wait_ms: u64,

    /// Pause after a navigation, in milliseconds
    pub page_settle_ms: u64,

    /// Pause after a click, in milliseconds
    pub click_settle_ms: u64,

    /// Pause after a scroll, in milliseconds
    pub scroll_settle_ms: u64,

    /// Default timeout for wait_for_element, in milliseconds
    pub wait_timeout_ms: u64,

    /// Poll interval for wait_for_element, in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            webdriver_url: "http://localhost:9515".to_string(),
            implicit_wait_ms: 10_000,
            page_settle_ms: 2_000,
            click_settle_ms: 1_000,
            scroll_settle_ms: 500,
            wait_timeout_ms: 10_000,
            poll_interval_ms: 100,
        }
    }
}

impl SessionConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = SessionConfig::default();

        if let Ok(url) = env::var("WEBHELM_WEBDRIVER_URL") {
            config.webdriver_url = url;
        }

        if let Ok(implicit_wait) = env::var("WEBHELM_IMPLICIT_WAIT_MS") {
            config.implicit_wait_ms = implicit_wait
                .parse()
                .map_err(|_| Error::configuration("Invalid WEBHELM_IMPLICIT_WAIT_MS"))?;
        }

        if let Ok(page_settle) = env::var("WEBHELM_PAGE_SETTLE_MS") {
            config.page_settle_ms = page_settle
                .parse()
                .map_err(|_| Error::configuration("Invalid WEBHELM_PAGE_SETTLE_MS"))?;
        }

        if let Ok(click_settle) = env::var("WEBHELM_CLICK_SETTLE_MS") {
            config.click_settle_ms = click_settle
                .parse()
                .map_err(|_| Error::configuration("Invalid WEBHELM_CLICK_SETTLE_MS"))?;
        }

        if let Ok(scroll_settle) = env::var("WEBHELM_SCROLL_SETTLE_MS") {
            config.scroll_settle_ms = scroll_settle
                .parse()
                .map_err(|_| Error::configuration("Invalid WEBHELM_SCROLL_SETTLE_MS"))?;
        }

        if let Ok(wait_timeout) = env::var("WEBHELM_WAIT_TIMEOUT_MS") {
            config.wait_timeout_ms = wait_timeout
                .parse()
                .map_err(|_| Error::configuration("Invalid WEBHELM_WAIT_TIMEOUT_MS"))?;
        }

        if let Ok(poll_interval) = env::var("WEBHELM_POLL_INTERVAL_MS") {
            config.poll_interval_ms = poll_interval
                .parse()
                .map_err(|_| Error::configuration("Invalid WEBHELM_POLL_INTERVAL_MS"))?;
        }

        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::configuration(format!("Failed to read config file: {}", e)))?;

        let config: SessionConfig = toml::from_str(&content)
            .map_err(|e| Error::configuration(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Implicit wait as a [`Duration`]
    pub fn implicit_wait(&self) -> Duration {
        Duration::from_millis(self.implicit_wait_ms)
    }

    /// Post-navigation settle pause as a [`Duration`]
    pub fn page_settle(&self) -> Duration {
        Duration::from_millis(self.page_settle_ms)
    }

    /// Post-click settle pause as a [`Duration`]
    pub fn click_settle(&self) -> Duration {
        Duration::from_millis(self.click_settle_ms)
    }

    /// Post-scroll settle pause as a [`Duration`]
    pub fn scroll_settle(&self) -> Duration {
        Duration::from_millis(self.scroll_settle_ms)
    }

    /// Default wait_for_element timeout as a [`Duration`]
    pub fn wait_timeout(&self) -> Duration {
        Duration::from_millis(self.wait_timeout_ms)
    }

    /// wait_for_element poll interval as a [`Duration`]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.webdriver_url, "http://localhost:9515");
        assert_eq!(config.implicit_wait_ms, 10_000);
        assert_eq!(config.page_settle_ms, 2_000);
        assert_eq!(config.click_settle_ms, 1_000);
        assert_eq!(config.scroll_settle_ms, 500);
        assert_eq!(config.wait_timeout_ms, 10_000);
    }

    #[test]
    fn test_duration_accessors() {
        let config = SessionConfig::default();
        assert_eq!(config.implicit_wait(), Duration::from_secs(10));
        assert_eq!(config.page_settle(), Duration::from_secs(2));
        assert_eq!(config.scroll_settle(), Duration::from_millis(500));
    }

    #[test]
    fn test_from_file_missing_is_configuration_error() {
        let err = SessionConfig::from_file("/nonexistent/webhelm.toml").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_from_file_bad_toml_is_configuration_error() {
        let path = std::env::temp_dir().join("webhelm_bad_config.toml");
        std::fs::write(&path, "webdriver_url = 9515").unwrap();

        let err = SessionConfig::from_file(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("Failed to parse config"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            webdriver_url = "http://localhost:4444"
            page_settle_ms = 0
        "#;

        let config: SessionConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.webdriver_url, "http://localhost:4444");
        assert_eq!(config.page_settle_ms, 0);
        // Unspecified fields keep their defaults
        assert_eq!(config.click_settle_ms, 1_000);
    }
}
