use crate::error::{CrawlError, LoadError};
use crate::parsers;
use fantoccini::{Client, ClientBuilder};
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

/// DOM-derived data for one successfully loaded page.
#[derive(Debug, Clone)]
pub struct LoadedPage {
    /// Page title (empty when the document has none)
    pub title: String,

    /// Meta tag name/content pairs in document order
    pub meta_pairs: Vec<(String, String)>,

    /// Outbound links as absolute URL strings, unvalidated
    pub links: Vec<String>,
}

/// Capability to navigate to a URL and return its rendered data.
///
/// The engine is generic over this so tests can drive it with a scripted
/// loader instead of a live browser session.
#[allow(async_fn_in_trait)]
pub trait PageLoader {
    async fn load(&mut self, url: &Url) -> Result<LoadedPage, LoadError>;

    /// Releases the underlying resource. Called exactly once per run, on
    /// every exit path.
    async fn close(self);
}

/// Page loader backed by a single WebDriver session, reused for every page
/// in a run.
pub struct WebDriverLoader {
    client: Client,
    load_timeout: Duration,
}

impl WebDriverLoader {
    pub async fn connect(webdriver_url: &str, load_timeout: Duration) -> Result<Self, CrawlError> {
        let client = ClientBuilder::native().connect(webdriver_url).await?;
        ::log::debug!("Connected to WebDriver at {}", webdriver_url);
        Ok(Self {
            client,
            load_timeout,
        })
    }

    /// Navigates to a URL and returns the raw page source, bounded by the
    /// per-page timeout. A timeout counts as a load failure like any other.
    pub async fn fetch_source(&mut self, url: &Url) -> Result<String, LoadError> {
        let timeout_secs = self.load_timeout.as_secs();
        let fetch = async {
            self.client
                .goto(url.as_str())
                .await
                .map_err(LoadError::Navigation)?;
            self.client.source().await.map_err(LoadError::Source)
        };
        timeout(self.load_timeout, fetch)
            .await
            .map_err(|_| LoadError::Timeout(timeout_secs))?
    }
}

impl PageLoader for WebDriverLoader {
    async fn load(&mut self, url: &Url) -> Result<LoadedPage, LoadError> {
        let source = self.fetch_source(url).await?;
        Ok(parsers::html::parse(&source, url))
    }

    async fn close(self) {
        if let Err(e) = self.client.close().await {
            ::log::warn!("Failed to close WebDriver session: {}", e);
        }
    }
}
