//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `Frontier`: FIFO queue of URLs waiting to be fetched
//! - `VisitedSet`: URLs already dequeued during this run
//! - `PageOutcome`: what happened to each dequeued entry
//! - `CrawlState`: the frontier and visited set owned by one crawl run

mod frontier;
mod page_state;
mod visited;

// Re-export main types
pub use frontier::{Frontier, FrontierEntry};
pub use page_state::{PageOutcome, SkipReason};
pub use visited::VisitedSet;

/// Mutable traversal state for a single crawl run
///
/// A fresh instance is built for every run; nothing is shared between runs.
#[derive(Debug)]
pub struct CrawlState {
    pub frontier: Frontier,
    pub visited: VisitedSet,
}

impl CrawlState {
    /// Creates the initial state: the base URL at depth 0, nothing visited
    pub fn seeded(base_url: impl Into<String>, dedupe_frontier: bool) -> Self {
        let mut frontier = Frontier::new(dedupe_frontier);
        frontier.push(FrontierEntry::new(base_url, 0));

        Self {
            frontier,
            visited: VisitedSet::new(),
        }
    }

    /// Queues a newly discovered link unless it has already been visited
    ///
    /// Returns true if the link was added to the frontier.
    pub fn enqueue_discovered(&mut self, url: &str, depth: u32) -> bool {
        if self.visited.contains(url) {
            return false;
        }
        self.frontier.push(FrontierEntry::new(url, depth))
    }

    /// Returns true once there is nothing left to fetch
    pub fn is_finished(&self) -> bool {
        self.frontier.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_state() {
        let mut state = CrawlState::seeded("https://a.test/manual/", false);
        assert!(!state.is_finished());
        assert!(state.visited.is_empty());

        let entry = state.frontier.pop().unwrap();
        assert_eq!(entry, FrontierEntry::new("https://a.test/manual/", 0));
        assert!(state.is_finished());
    }

    #[test]
    fn test_enqueue_skips_visited() {
        let mut state = CrawlState::seeded("https://a.test/manual/", false);
        state.visited.mark("https://a.test/manual/a");

        assert!(!state.enqueue_discovered("https://a.test/manual/a", 1));
        assert!(state.enqueue_discovered("https://a.test/manual/b", 1));
        assert_eq!(state.frontier.len(), 2);
    }
}
