use std::collections::{HashSet, VecDeque};
use url::Url;

/// FIFO queue of discovered, not-yet-attempted URLs plus the set of URLs
/// already attempted, with the page budget enforced as a hard ceiling.
///
/// Deduplication is exact equality of parsed URLs (the `url` crate's
/// canonical string form). URLs differing only by a trailing slash or by
/// query-string ordering are distinct pages on purpose.
pub struct Frontier {
    queue: VecDeque<Url>,
    queued: HashSet<Url>,
    visited: HashSet<Url>,
    page_budget: usize,
}

impl Frontier {
    /// Creates an empty frontier. A budget below 1 is clamped to 1.
    pub fn new(page_budget: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            queued: HashSet::new(),
            visited: HashSet::new(),
            page_budget: page_budget.max(1),
        }
    }

    /// Enqueues the starting URL. Same duplicate suppression as `offer`.
    pub fn seed(&mut self, url: Url) {
        self.offer(url);
    }

    /// True while there is something to dequeue and the budget allows
    /// another attempt. Once `visited_count` reaches the budget this is
    /// false even if the queue is non-empty; leftover entries are simply
    /// discarded at termination.
    pub fn has_next(&self) -> bool {
        !self.queue.is_empty() && self.visited.len() < self.page_budget
    }

    /// Dequeues the earliest-enqueued URL, or `None` when `has_next` is
    /// false. Callers check `has_next` first.
    pub fn next(&mut self) -> Option<Url> {
        if !self.has_next() {
            return None;
        }
        let url = self.queue.pop_front()?;
        self.queued.remove(&url);
        Some(url)
    }

    /// Records that a URL has been attempted. Idempotent.
    pub fn mark_visited(&mut self, url: &Url) {
        self.visited.insert(url.clone());
    }

    pub fn is_visited(&self, url: &Url) -> bool {
        self.visited.contains(url)
    }

    /// Enqueues a URL unless it was already attempted or is already
    /// waiting in the queue.
    pub fn offer(&mut self, url: Url) {
        if self.visited.contains(&url) || self.queued.contains(&url) {
            ::log::trace!("Skipping already visited or queued link: {}", url);
            return;
        }
        self.queued.insert(url.clone());
        self.queue.push_back(url);
    }

    /// Number of URLs attempted so far.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of URLs waiting in the queue.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn dequeues_in_fifo_order() {
        let mut frontier = Frontier::new(10);
        frontier.seed(url("https://example.com/"));
        frontier.offer(url("https://example.com/a"));
        frontier.offer(url("https://example.com/b"));

        assert_eq!(frontier.next(), Some(url("https://example.com/")));
        assert_eq!(frontier.next(), Some(url("https://example.com/a")));
        assert_eq!(frontier.next(), Some(url("https://example.com/b")));
        assert_eq!(frontier.next(), None);
    }

    #[test]
    fn duplicate_offers_are_suppressed() {
        let mut frontier = Frontier::new(10);
        frontier.offer(url("https://example.com/a"));
        frontier.offer(url("https://example.com/a"));
        assert_eq!(frontier.pending(), 1);
    }

    #[test]
    fn visited_urls_are_never_requeued() {
        let mut frontier = Frontier::new(10);
        let a = url("https://example.com/a");
        frontier.mark_visited(&a);
        frontier.offer(a);
        assert_eq!(frontier.pending(), 0);
        assert!(!frontier.has_next());
    }

    #[test]
    fn mark_visited_is_idempotent() {
        let mut frontier = Frontier::new(10);
        let a = url("https://example.com/a");
        frontier.mark_visited(&a);
        frontier.mark_visited(&a);
        assert_eq!(frontier.visited_count(), 1);
    }

    #[test]
    fn budget_is_a_hard_ceiling() {
        let mut frontier = Frontier::new(2);
        frontier.offer(url("https://example.com/a"));
        frontier.offer(url("https://example.com/b"));
        frontier.offer(url("https://example.com/c"));

        let a = frontier.next().unwrap();
        frontier.mark_visited(&a);
        let b = frontier.next().unwrap();
        frontier.mark_visited(&b);

        // Queue still holds /c, but the budget is exhausted.
        assert_eq!(frontier.pending(), 1);
        assert!(!frontier.has_next());
        assert_eq!(frontier.next(), None);
    }

    #[test]
    fn zero_budget_is_clamped_to_one() {
        let mut frontier = Frontier::new(0);
        frontier.offer(url("https://example.com/"));
        assert!(frontier.has_next());
        let seed = frontier.next().unwrap();
        frontier.mark_visited(&seed);
        assert!(!frontier.has_next());
    }

    #[test]
    fn trailing_slash_variants_are_distinct_pages() {
        let mut frontier = Frontier::new(10);
        frontier.offer(url("https://example.com/a"));
        frontier.offer(url("https://example.com/a/"));
        assert_eq!(frontier.pending(), 2);
    }
}
