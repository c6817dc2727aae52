//! Inventory of crawled pages
//!
//! The inventory is append-only for the lifetime of one crawl: every
//! successfully fetched page is recorded once, both in discovery order and
//! in its category bucket. Renderers read it through [`Inventory::all`] and
//! [`Inventory::by_category`].

mod index;

pub use index::{CategorizedIndex, CategoryBucket, IndexEntry};

use crate::category::Category;
use serde::Serialize;

/// A successfully fetched page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRecord {
    /// Canonical URL the page was fetched from
    pub url: String,

    /// Path component of `url`
    pub path: String,

    /// Hops from the base URL
    pub depth: u32,

    /// Trimmed `<title>` text, if the page has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl PageRecord {
    /// The `{url, path}` pair stored in the category index
    pub fn index_entry(&self) -> IndexEntry {
        IndexEntry {
            url: self.url.clone(),
            path: self.path.clone(),
        }
    }
}

/// All pages recorded during one crawl
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    pages: Vec<PageRecord>,
    categorized: CategorizedIndex,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a page under its category
    pub fn record(&mut self, page: PageRecord, category: Category) {
        self.categorized.append(category, page.index_entry());
        self.pages.push(page);
    }

    /// Every recorded page in discovery order
    pub fn all(&self) -> &[PageRecord] {
        &self.pages
    }

    /// Recorded pages grouped by category
    pub fn by_category(&self) -> &CategorizedIndex {
        &self.categorized
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Looks a recorded page up by URL
    pub fn find(&self, url: &str) -> Option<&PageRecord> {
        self.pages.iter().find(|p| p.url == url)
    }
}
