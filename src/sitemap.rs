use crate::loader::WebDriverLoader;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static LOC_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<loc>").expect("static pattern is valid"));

/// Fetches `/sitemap.xml` for the seed's origin through the shared
/// WebDriver session and counts its `<loc>` entries. Returns `None` when
/// the sitemap is missing, unreadable, or lists nothing.
///
/// Independent of the crawl engine; callers may use the count to
/// pre-populate a page budget.
pub async fn estimate_page_count(loader: &mut WebDriverLoader, seed: &Url) -> Option<usize> {
    let sitemap_url = seed.join("/sitemap.xml").ok()?;
    let source = match loader.fetch_source(&sitemap_url).await {
        Ok(source) => source,
        Err(e) => {
            ::log::debug!("No sitemap at {}: {}", sitemap_url, e);
            return None;
        }
    };
    let count = count_locations(&source);
    ::log::info!("Sitemap at {} lists {} locations", sitemap_url, count);
    if count > 0 { Some(count) } else { None }
}

/// Counts `<loc>` occurrences in sitemap XML (or a browser's rendering of
/// it, which keeps the tag text intact).
pub fn count_locations(xml: &str) -> usize {
    LOC_TAG.find_iter(xml).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_loc_entries() {
        let xml = r#"<?xml version="1.0"?>
            <urlset>
                <url><loc>https://example.com/</loc></url>
                <url><loc>https://example.com/a</loc></url>
                <url><loc>https://example.com/b</loc></url>
            </urlset>"#;
        assert_eq!(count_locations(xml), 3);
    }

    #[test]
    fn empty_document_counts_zero() {
        assert_eq!(count_locations("<urlset></urlset>"), 0);
        assert_eq!(count_locations("404 not found"), 0);
    }
}
