// Re-export modules
pub mod config;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod loader;
pub mod parsers;
pub mod results;
pub mod sitemap;
pub mod urls;

// Re-export commonly used types for convenience
pub use config::CrawlerConfig;
pub use error::{CrawlError, LoadError};
pub use results::{CrawlReport, PageRecord};

use crate::loader::WebDriverLoader;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

/// Builder for a single crawl run.
///
/// ```no_run
/// # async fn demo() -> Result<(), metacrawl::CrawlError> {
/// let report = metacrawl::Crawl::new("https://example.com")
///     .with_page_budget(25)
///     .run()
///     .await?;
/// println!("{} pages", report.pages.len());
/// # Ok(())
/// # }
/// ```
pub struct Crawl {
    config: CrawlerConfig,
    sitemap_estimate: bool,
    stop: Option<Arc<AtomicBool>>,
}

impl Crawl {
    /// Create a new crawl builder for the given seed URL
    pub fn new(seed_url: &str) -> Self {
        Self {
            config: CrawlerConfig::new(seed_url),
            sitemap_estimate: false,
            stop: None,
        }
    }

    /// Apply a full configuration, replacing the current one
    pub fn with_config(mut self, config: CrawlerConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        mut self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        self.config = CrawlerConfig::from_file(path)?;
        Ok(self)
    }

    /// Apply configuration from a JSON string
    pub fn with_config_str(mut self, json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        self.config = CrawlerConfig::from_json(json)?;
        Ok(self)
    }

    /// Set the maximum number of pages to attempt
    pub fn with_page_budget(mut self, page_budget: usize) -> Self {
        self.config.page_budget = page_budget;
        self
    }

    /// Set the per-page load timeout in seconds
    pub fn with_load_timeout(mut self, seconds: u64) -> Self {
        self.config.load_timeout_secs = seconds;
        self
    }

    /// Set the WebDriver server URL
    pub fn with_webdriver_url(mut self, url: &str) -> Self {
        self.config.webdriver_url = url.to_string();
        self
    }

    /// Use the site's sitemap.xml entry count as the page budget when one
    /// is available
    pub fn with_sitemap_estimate(mut self, enabled: bool) -> Self {
        self.sitemap_estimate = enabled;
        self
    }

    /// Attach a stop flag. Setting it stops new dequeues; a page load
    /// already in flight finishes or times out naturally.
    pub fn with_stop_flag(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Validate the seed, open a WebDriver session and run the crawl.
    ///
    /// Only an invalid seed URL or a failed session handshake return an
    /// error; per-page failures end up in the report's failure list.
    pub async fn run(self) -> Result<CrawlReport, CrawlError> {
        // Seed validation comes first so a bad seed never costs a session.
        let seed = urls::parse_http_url(&self.config.seed_url)?;

        // Override the WebDriver URL with an environment variable if provided
        let mut webdriver_url = self.config.webdriver_url.clone();
        if let Ok(env_url) = std::env::var("WEBDRIVER_URL") {
            if !env_url.is_empty() {
                webdriver_url = env_url;
            }
        }

        let mut loader = WebDriverLoader::connect(
            &webdriver_url,
            Duration::from_secs(self.config.load_timeout_secs),
        )
        .await?;

        let mut page_budget = self.config.page_budget;
        if self.sitemap_estimate {
            if let Some(count) = sitemap::estimate_page_count(&mut loader, &seed).await {
                ::log::info!("Using sitemap location count {} as page budget", count);
                page_budget = count;
            }
        }

        Ok(engine::crawl(loader, seed, page_budget, self.stop).await)
    }
}
