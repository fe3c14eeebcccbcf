use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "metacrawl")]
#[command(about = "Crawls a site breadth-first and extracts per-page title and meta tags")]
#[command(version)]
pub struct Args {
    /// Seed URL to start crawling from
    pub seed_url: String,

    /// Maximum number of pages to attempt
    #[arg(short, long, default_value_t = 10)]
    pub pages: usize,

    /// Per-page load timeout in seconds
    #[arg(long, default_value_t = 15)]
    pub timeout: u64,

    /// WebDriver server URL
    #[arg(long, default_value = "http://localhost:4444")]
    pub webdriver_url: String,

    /// Use the site's sitemap.xml entry count as the page budget when available
    #[arg(long)]
    pub sitemap_estimate: bool,

    /// Pretty-print the JSON report
    #[arg(long)]
    pub pretty: bool,
}
