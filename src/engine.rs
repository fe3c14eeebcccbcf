use crate::frontier::Frontier;
use crate::loader::PageLoader;
use crate::results::{CrawlReport, PageFailure, PageRecord};
use crate::urls;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use url::Url;

/// Drives a breadth-first crawl of every same-host page reachable from the
/// seed, up to `page_budget` attempts, one page at a time through a single
/// loader.
///
/// The seed is validated by the caller before any loader exists; from here
/// on nothing aborts the run. A page that fails to load is marked visited
/// with no record and the loop continues, so total work is bounded by
/// `page_budget` attempts even on cyclic or flaky sites. The loader is
/// closed on every exit path.
pub async fn crawl<L: PageLoader>(
    mut loader: L,
    seed: Url,
    page_budget: usize,
    stop: Option<Arc<AtomicBool>>,
) -> CrawlReport {
    // Host presence was checked during seed validation.
    let seed_host = seed.host_str().unwrap_or_default().to_string();

    let mut frontier = Frontier::new(page_budget);
    frontier.seed(seed);

    let mut report = CrawlReport::default();
    while frontier.has_next() {
        if let Some(flag) = &stop {
            if flag.load(Ordering::Relaxed) {
                ::log::info!("Stop requested, leaving {} queued URLs", frontier.pending());
                break;
            }
        }

        let Some(url) = frontier.next() else { break };
        if frontier.is_visited(&url) {
            continue;
        }

        // Attempted URLs are never retried, success or not.
        frontier.mark_visited(&url);
        report.attempted += 1;

        match loader.load(&url).await {
            Ok(page) => {
                ::log::info!("Loaded {} ({} links)", url, page.links.len());
                merge_links(&page.links, &seed_host, &mut frontier);
                report.append(PageRecord::new(url.to_string(), page.title, page.meta_pairs));
            }
            Err(e) => {
                ::log::warn!("Failed to load {}: {}", url, e);
                report.failures.push(PageFailure {
                    url: url.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    ::log::info!(
        "Crawl finished: {} pages, {} failures, {} attempted",
        report.pages.len(),
        report.failures.len(),
        report.attempted
    );

    loader.close().await;
    report
}

/// Offers each discovered link that parses as http(s) and lives on the
/// seed host. An individually malformed href is dropped without affecting
/// the page it came from.
fn merge_links(links: &[String], seed_host: &str, frontier: &mut Frontier) {
    for link in links {
        let Some(parsed) = urls::parse_link(link) else {
            ::log::debug!("Dropping malformed link: {}", link);
            continue;
        };
        if !urls::same_domain(&parsed, seed_host) {
            ::log::trace!("Skipping external link: {}", parsed);
            continue;
        }
        frontier.offer(parsed);
    }
}
