//! URL handling module for Manual-Mapper
//!
//! This module provides the scope filter that keeps the crawl on one host and
//! one path prefix, plus the canonicalization helpers shared by the link
//! extractor and the crawl loop.

mod filter;
mod normalize;

// Re-export main functions
pub use filter::ScopeFilter;
pub use normalize::{authority, canonicalize, page_path, strip_fragment};
