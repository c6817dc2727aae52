//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with optional retries
//! - HTML parsing and link extraction
//! - Request pacing
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod parser;
mod scheduler;

pub use coordinator::{run_crawl, Coordinator};
pub use fetcher::{build_http_client, fetch_url, Fetch, FetchResult, HttpFetcher};
pub use parser::{extract_anchor_hrefs, extract_links, parse_html, resolve_links, ParsedPage};
pub use scheduler::Scheduler;

use crate::config::Config;
use crate::inventory::Inventory;
use crate::output::CrawlStatistics;
use crate::Result;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Validate the configuration
/// 2. Build the HTTP client
/// 3. Walk the site breadth first from the base URL
/// 4. Return the inventory and run statistics
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok((Inventory, CrawlStatistics))` - Crawl finished
/// * `Err(MapperError)` - Configuration or client setup failed
pub async fn crawl(config: Config) -> Result<(Inventory, CrawlStatistics)> {
    run_crawl(config).await
}
