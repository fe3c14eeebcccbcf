use thiserror::Error;

/// Errors that abort a whole crawl run.
///
/// Everything else (a page that fails to load, a link that fails to parse)
/// is absorbed by the engine and surfaced through the report's failure list
/// and warn-level logs.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The seed string is not a valid absolute http(s) URL. Raised before
    /// any WebDriver session is created.
    #[error("invalid seed URL {url:?}: {reason}")]
    InvalidSeedUrl { url: String, reason: String },

    /// No WebDriver session could be established.
    #[error("failed to start WebDriver session: {0}")]
    Session(#[from] fantoccini::error::NewSessionError),
}

/// Per-page load failures. Isolated by the engine: the URL is marked
/// visited, no record is produced, the run continues.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("page load timed out after {0} seconds")]
    Timeout(u64),

    #[error("navigation failed: {0}")]
    Navigation(#[source] fantoccini::error::CmdError),

    #[error("could not read page source: {0}")]
    Source(#[source] fantoccini::error::CmdError),
}
