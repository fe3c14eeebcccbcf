use clap::Parser;
use metacrawl::Crawl;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Starting crawl of {}", args.seed_url);
    println!("Note: crawling requires a WebDriver server (e.g. chromedriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
    );

    // Ctrl-C stops new dequeues; the page in flight finishes or times out
    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = Arc::clone(&stop);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                ::log::info!("Interrupt received, finishing the current page before stopping");
                stop.store(true, Ordering::Relaxed);
            }
        });
    }

    let start_time = std::time::Instant::now();
    let crawl = Crawl::new(&args.seed_url)
        .with_page_budget(args.pages)
        .with_load_timeout(args.timeout)
        .with_webdriver_url(&args.webdriver_url)
        .with_sitemap_estimate(args.sitemap_estimate)
        .with_stop_flag(stop);

    let report = match crawl.run().await {
        Ok(report) => report,
        Err(e) => {
            ::log::error!("Crawl failed: {}", e);
            std::process::exit(1);
        }
    };

    let duration = start_time.elapsed();
    ::log::info!(
        "Crawled {} pages ({} failures) in {:.2} seconds",
        report.pages.len(),
        report.failures.len(),
        duration.as_secs_f64()
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    };
    match json {
        Ok(json) => println!("{}", json),
        Err(e) => {
            ::log::error!("Failed to serialize report: {}", e);
            std::process::exit(1);
        }
    }
}
