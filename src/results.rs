use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata extracted from one successfully loaded page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRecord {
    /// URL of the page
    pub url: String,

    /// Page title (empty when the document has none)
    pub title: String,

    /// Meta tag name/content pairs; duplicate names last-write-wins
    pub meta: HashMap<String, String>,
}

impl PageRecord {
    /// Builds a record from loader output, folding the ordered meta pairs
    /// into a map so a later tag with the same name overwrites an earlier one.
    pub fn new(url: String, title: String, meta_pairs: Vec<(String, String)>) -> Self {
        let mut meta = HashMap::new();
        for (name, content) in meta_pairs {
            meta.insert(name, content);
        }
        Self { url, title, meta }
    }
}

/// A page that was attempted but contributed no record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageFailure {
    pub url: String,
    pub reason: String,
}

/// Everything a crawl run produced.
///
/// `pages` holds at most `page_budget` records, one per successfully loaded
/// URL, in the order pages were visited (breadth-first from the seed under
/// the FIFO frontier). `failures` is the side-channel for pages that were
/// attempted and lost; a short `pages` list may mean a small site or a
/// flaky one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrawlReport {
    pub pages: Vec<PageRecord>,
    pub failures: Vec<PageFailure>,

    /// Total URLs dequeued and attempted, successful or not
    pub attempted: usize,
}

impl CrawlReport {
    /// Appends a record in visit order. Uniqueness is guaranteed upstream
    /// by the visited set; no deduplication happens here.
    pub fn append(&mut self, record: PageRecord) {
        self.pages.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_meta_names_last_write_wins() {
        let record = PageRecord::new(
            "https://example.com/".to_string(),
            "Home".to_string(),
            vec![
                ("description".to_string(), "first".to_string()),
                ("og:title".to_string(), "Home".to_string()),
                ("description".to_string(), "second".to_string()),
            ],
        );
        assert_eq!(record.meta.len(), 2);
        assert_eq!(record.meta["description"], "second");
    }

    #[test]
    fn report_serializes_to_json() {
        let mut report = CrawlReport::default();
        report.attempted = 1;
        report.append(PageRecord::new(
            "https://example.com/".to_string(),
            "Home".to_string(),
            vec![],
        ));
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"attempted\":1"));
        assert!(json.contains("https://example.com/"));
    }
}
