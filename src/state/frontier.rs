use std::collections::{HashSet, VecDeque};

/// A URL waiting to be fetched, with the depth it was discovered at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    /// Canonical, fragment-free URL
    pub url: String,

    /// Hops from the base URL (the base URL is depth 0)
    pub depth: u32,
}

impl FrontierEntry {
    pub fn new(url: impl Into<String>, depth: u32) -> Self {
        Self {
            url: url.into(),
            depth,
        }
    }
}

/// FIFO queue of pending fetches
///
/// Strict first-in first-out order is what makes the crawl breadth first:
/// entries are dequeued in non-decreasing depth order.
///
/// By default the same URL may be queued more than once before it is first
/// dequeued; the crawl loop discards the later copies. With deduplication
/// enabled a URL already pending is not queued again.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<FrontierEntry>,
    pending: Option<HashSet<String>>,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new(dedupe: bool) -> Self {
        Self {
            queue: VecDeque::new(),
            pending: dedupe.then(HashSet::new),
        }
    }

    /// Appends an entry to the back of the queue
    ///
    /// Returns false if deduplication is on and the URL is already pending.
    pub fn push(&mut self, entry: FrontierEntry) -> bool {
        if let Some(pending) = &mut self.pending {
            if !pending.insert(entry.url.clone()) {
                return false;
            }
        }
        self.queue.push_back(entry);
        true
    }

    /// Removes the earliest-enqueued entry
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        let entry = self.queue.pop_front()?;
        if let Some(pending) = &mut self.pending {
            pending.remove(&entry.url);
        }
        Some(entry)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frontier_is_empty() {
        let frontier = Frontier::new(false);
        assert!(frontier.is_empty());
        assert_eq!(frontier.len(), 0);
    }

    #[test]
    fn test_fifo_order() {
        let mut frontier = Frontier::new(false);
        frontier.push(FrontierEntry::new("https://a.test/1", 0));
        frontier.push(FrontierEntry::new("https://a.test/2", 1));
        frontier.push(FrontierEntry::new("https://a.test/3", 1));

        assert_eq!(frontier.pop().unwrap().url, "https://a.test/1");
        assert_eq!(frontier.pop().unwrap().url, "https://a.test/2");
        assert_eq!(frontier.pop().unwrap().url, "https://a.test/3");
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn test_duplicates_allowed_without_dedupe() {
        let mut frontier = Frontier::new(false);
        assert!(frontier.push(FrontierEntry::new("https://a.test/x", 1)));
        assert!(frontier.push(FrontierEntry::new("https://a.test/x", 2)));
        assert_eq!(frontier.len(), 2);
    }

    #[test]
    fn test_dedupe_rejects_pending_url() {
        let mut frontier = Frontier::new(true);
        assert!(frontier.push(FrontierEntry::new("https://a.test/x", 1)));
        assert!(!frontier.push(FrontierEntry::new("https://a.test/x", 2)));
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.pop().unwrap().depth, 1);
    }

    #[test]
    fn test_dedupe_allows_requeue_after_pop() {
        let mut frontier = Frontier::new(true);
        frontier.push(FrontierEntry::new("https://a.test/x", 1));
        frontier.pop();
        assert!(frontier.push(FrontierEntry::new("https://a.test/x", 3)));
    }
}
