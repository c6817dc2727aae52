//! Crawl statistics
//!
//! Counters collected by the coordinator during a run, and their console
//! rendering.

use crate::inventory::Inventory;
use std::time::Duration;

/// Counters for one crawl run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStatistics {
    /// Frontier entries taken off the queue
    pub dequeued: u64,

    /// Entries dropped because the URL was already visited
    pub skipped_visited: u64,

    /// Entries dropped because they were deeper than the limit
    pub skipped_depth: u64,

    /// URLs whose fetch failed after all attempts
    pub fetch_failed: u64,

    /// Pages added to the inventory
    pub recorded: u64,

    /// New frontier entries created from extracted links
    pub links_enqueued: u64,

    /// Extra attempts made for transient failures
    pub retries: u64,

    /// HTTP requests issued, retries included
    pub requests: u64,

    /// Wall-clock time of the run
    pub duration: Duration,
}

impl CrawlStatistics {
    /// Entries dropped without a fetch
    pub fn skipped(&self) -> u64 {
        self.skipped_visited + self.skipped_depth
    }

    /// URLs that were fetched, successfully or not
    pub fn fetched(&self) -> u64 {
        self.recorded + self.fetch_failed
    }

    /// Share of fetched URLs that were recorded, as a percentage
    pub fn success_rate(&self) -> f64 {
        let fetched = self.fetched();
        if fetched == 0 {
            return 0.0;
        }
        (self.recorded as f64 / fetched as f64) * 100.0
    }
}

/// Formats statistics and per-category totals for the console
pub fn format_statistics(stats: &CrawlStatistics, inventory: &Inventory) -> String {
    let mut out = String::new();

    out.push_str("=== Crawl Statistics ===\n\n");

    out.push_str(&format!("総ページ数: {}\n", inventory.len()));
    for (category, entries) in inventory.by_category().sorted_by_label() {
        out.push_str(&format!("  {}: {}ページ\n", category.label(), entries.len()));
    }
    out.push('\n');

    out.push_str("Fetching:\n");
    out.push_str(&format!("  Requests: {}\n", stats.requests));
    out.push_str(&format!("  Recorded: {}\n", stats.recorded));
    out.push_str(&format!("  Failed: {}\n", stats.fetch_failed));
    if stats.retries > 0 {
        out.push_str(&format!("  Retries: {}\n", stats.retries));
    }
    out.push_str(&format!(
        "  Skipped: {} (visited {}, too deep {})\n",
        stats.skipped(),
        stats.skipped_visited,
        stats.skipped_depth
    ));
    out.push_str(&format!("  Links queued: {}\n", stats.links_enqueued));
    out.push('\n');

    out.push_str(&format!(
        "Success Rate: {:.1}% ({} / {} pages fetched) in {:.1}s\n",
        stats.success_rate(),
        stats.recorded,
        stats.fetched(),
        stats.duration.as_secs_f64()
    ));

    out
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - Counters from the finished (or interrupted) run
/// * `inventory` - The pages recorded by that run
pub fn print_statistics(stats: &CrawlStatistics, inventory: &Inventory) {
    print!("{}", format_statistics(stats, inventory));
}
