//! Terminal outcomes for a dequeued frontier entry
//!
//! Each entry moves `pending -> dequeued -> outcome`; once an outcome is
//! reached nothing else happens to that entry.

use crate::category::Category;
use std::fmt;

/// Why an entry was discarded without fetching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The URL was already dequeued earlier in this run
    AlreadyVisited,

    /// The entry is deeper than the configured maximum
    DepthExceeded,
}

/// What happened to one dequeued entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Discarded without a request
    Skipped { url: String, reason: SkipReason },

    /// The request failed; no record, no links followed
    FetchFailed { url: String, reason: String },

    /// Fetched and added to the inventory
    Recorded {
        url: String,
        depth: u32,
        category: Category,
        links_enqueued: usize,
    },
}

impl PageOutcome {
    /// The URL this outcome belongs to
    pub fn url(&self) -> &str {
        match self {
            Self::Skipped { url, .. }
            | Self::FetchFailed { url, .. }
            | Self::Recorded { url, .. } => url,
        }
    }

    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded { .. })
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyVisited => write!(f, "already visited"),
            Self::DepthExceeded => write!(f, "depth exceeded"),
        }
    }
}
