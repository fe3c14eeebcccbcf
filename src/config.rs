use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for a crawl run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// URL to start crawling from
    pub seed_url: String,

    /// Maximum number of distinct URLs attempted in one run. A value of 0
    /// is clamped to 1 when the crawl starts.
    #[serde(default = "default_page_budget")]
    pub page_budget: usize,

    /// Per-page load timeout in seconds
    #[serde(default = "default_load_timeout_secs")]
    pub load_timeout_secs: u64,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,
}

/// Default value for page_budget
fn default_page_budget() -> usize {
    10
}

/// Default value for load_timeout_secs
fn default_load_timeout_secs() -> u64 {
    15
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

impl CrawlerConfig {
    /// Create a new configuration with default values
    pub fn new(seed_url: &str) -> Self {
        Self {
            seed_url: seed_url.to_string(),
            page_budget: default_page_budget(),
            load_timeout_secs: default_load_timeout_secs(),
            webdriver_url: default_webdriver_url(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = CrawlerConfig::from_json(r#"{"seed_url": "https://example.com"}"#).unwrap();
        assert_eq!(config.page_budget, 10);
        assert_eq!(config.load_timeout_secs, 15);
        assert_eq!(config.webdriver_url, "http://localhost:4444");
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let config = CrawlerConfig::from_json(
            r#"{"seed_url": "https://example.com", "page_budget": 50, "load_timeout_secs": 5}"#,
        )
        .unwrap();
        assert_eq!(config.page_budget, 50);
        assert_eq!(config.load_timeout_secs, 5);
    }

    #[test]
    fn seed_url_is_required() {
        assert!(CrawlerConfig::from_json(r#"{"page_budget": 3}"#).is_err());
    }
}
