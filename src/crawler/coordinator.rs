//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that ties everything together:
//! - Owning the frontier, visited set and inventory for one run
//! - Pacing fetches through the scheduler
//! - Coordinating fetching, link extraction and classification
//! - Reporting progress and final statistics

use crate::category::classify;
use crate::config::{validate, Config};
use crate::crawler::fetcher::{Fetch, FetchResult, HttpFetcher};
use crate::crawler::parser::{parse_html, resolve_links};
use crate::crawler::scheduler::Scheduler;
use crate::inventory::{Inventory, PageRecord};
use crate::output::CrawlStatistics;
use crate::state::{CrawlState, FrontierEntry, PageOutcome, SkipReason};
use crate::url::{canonicalize, page_path, ScopeFilter};
use crate::Result;
use std::collections::BTreeSet;
use std::time::Duration;
use tokio::time::Instant;
use url::Url;

/// Main crawler coordinator structure
///
/// One coordinator drives one crawl run. All mutable crawl state lives here
/// and is discarded with it; a new run needs a new coordinator.
pub struct Coordinator<F: Fetch = HttpFetcher> {
    config: Config,
    base_url: String,
    filter: ScopeFilter,
    fetcher: F,
    scheduler: Scheduler,
    state: CrawlState,
    inventory: Inventory,
    stats: CrawlStatistics,
    started: Option<Instant>,
}

impl Coordinator<HttpFetcher> {
    /// Creates a coordinator that fetches over HTTP
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(MapperError)` - Invalid configuration or HTTP client failure
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = HttpFetcher::from_config(&config.user_agent, &config.crawler)?;
        Self::with_fetcher(config, fetcher)
    }
}

impl<F: Fetch> Coordinator<F> {
    /// Creates a coordinator with a custom fetch capability
    ///
    /// The configuration is validated here so that a bad setup fails before
    /// any request is made.
    pub fn with_fetcher(config: Config, fetcher: F) -> Result<Self> {
        validate(&config)?;

        let base_url = canonicalize(&config.target.base_url)?.to_string();
        let filter = ScopeFilter::from_config(&config.target);
        let scheduler = Scheduler::from_config(&config.crawler);
        let state = CrawlState::seeded(base_url.clone(), config.crawler.dedupe_frontier);

        Ok(Self {
            config,
            base_url,
            filter,
            fetcher,
            scheduler,
            state,
            inventory: Inventory::new(),
            stats: CrawlStatistics::default(),
            started: None,
        })
    }

    /// Runs the crawl loop until the frontier is empty
    ///
    /// Individual page failures never abort the run. The returned statistics
    /// are also available afterwards through [`Coordinator::stats`].
    pub async fn run(&mut self) -> CrawlStatistics {
        tracing::info!(
            "Starting crawl of {} (max depth {}, delay {:?})",
            self.base_url,
            self.config.crawler.max_depth,
            self.scheduler.delay()
        );

        while !self.state.is_finished() {
            let Some(outcome) = self.step().await else {
                break;
            };

            // Progress reporting every 10 recorded pages
            if outcome.is_recorded() && self.stats.recorded % 10 == 0 {
                let seconds = self.stats.duration.as_secs_f64().max(f64::EPSILON);
                let rate = self.stats.requests as f64 / seconds;
                tracing::info!(
                    "Progress: {} pages recorded, {} in frontier, {:.2} requests/sec (last: {})",
                    self.stats.recorded,
                    self.state.frontier.len(),
                    rate,
                    outcome.url()
                );
            }
        }

        self.stats.duration = self.elapsed();
        tracing::info!(
            "Crawl completed: {} pages recorded, {} failed, in {:?}",
            self.stats.recorded,
            self.stats.fetch_failed,
            self.stats.duration
        );

        self.stats.clone()
    }

    /// Processes exactly one frontier entry
    ///
    /// Returns `None` when the frontier is empty, otherwise the outcome of
    /// the dequeued entry. The run clock starts with the first step and
    /// `stats().duration` is brought up to date after every step.
    pub async fn step(&mut self) -> Option<PageOutcome> {
        let entry = self.state.frontier.pop()?;
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
        self.stats.dequeued += 1;

        let outcome = self.process(entry).await;
        self.stats.duration = self.elapsed();
        Some(outcome)
    }

    async fn process(&mut self, entry: FrontierEntry) -> PageOutcome {
        if self.state.visited.contains(&entry.url) {
            tracing::debug!("Skipping {} (already visited)", entry.url);
            self.stats.skipped_visited += 1;
            return PageOutcome::Skipped {
                url: entry.url,
                reason: SkipReason::AlreadyVisited,
            };
        }

        if entry.depth > self.config.crawler.max_depth {
            tracing::debug!("Skipping {} (depth {} exceeded)", entry.url, entry.depth);
            self.stats.skipped_depth += 1;
            return PageOutcome::Skipped {
                url: entry.url,
                reason: SkipReason::DepthExceeded,
            };
        }

        self.state.visited.mark(&entry.url);
        tracing::info!("Crawling: {} (depth: {})", entry.url, entry.depth);

        match self.fetch_with_retry(&entry.url).await {
            FetchResult::Success { body, .. } if !body.is_empty() => {
                self.record_page(entry, &body)
            }
            // A page with no content is not part of the inventory
            FetchResult::Success { .. } => {
                self.fetch_failed(entry, "Empty response body".to_string())
            }
            failure => {
                let reason = failure.failure_reason().unwrap_or_default();
                self.fetch_failed(entry, reason)
            }
        }
    }

    fn fetch_failed(&mut self, entry: FrontierEntry, reason: String) -> PageOutcome {
        tracing::warn!("Failed to fetch {}: {}", entry.url, reason);
        self.stats.fetch_failed += 1;
        PageOutcome::FetchFailed {
            url: entry.url,
            reason,
        }
    }

    /// Fetches a URL, retrying transient failures up to `max-retries` times
    ///
    /// Every attempt waits for its own politeness slot.
    async fn fetch_with_retry(&mut self, url: &str) -> FetchResult {
        let max_retries = self.config.crawler.max_retries;
        let mut attempt = 0;

        loop {
            self.scheduler.wait_turn().await;
            self.stats.requests = self.scheduler.requests();

            let result = self.fetcher.fetch(url).await;
            if !result.is_retryable() || attempt >= max_retries {
                return result;
            }

            attempt += 1;
            self.stats.retries += 1;
            tracing::debug!(
                "Retrying {} ({}/{}): {}",
                url,
                attempt,
                max_retries,
                result.failure_reason().unwrap_or_default()
            );
        }
    }

    /// Records a fetched page and queues its unvisited links
    fn record_page(&mut self, entry: FrontierEntry, body: &str) -> PageOutcome {
        let parsed = parse_html(body);

        // Relative links resolve against the URL that was requested
        let links = match Url::parse(&entry.url) {
            Ok(base) => resolve_links(&parsed.hrefs, &base, &self.filter),
            Err(e) => {
                tracing::warn!("Cannot resolve links on {}: {}", entry.url, e);
                BTreeSet::new()
            }
        };

        let path = page_path(&entry.url);
        let category = classify(&path);
        tracing::debug!("{} classified as {}", path, category.name());

        self.inventory.record(
            PageRecord {
                url: entry.url.clone(),
                path,
                depth: entry.depth,
                title: parsed.title,
            },
            category,
        );
        self.stats.recorded += 1;

        let next_depth = entry.depth + 1;
        let links_enqueued = links
            .iter()
            .filter(|link| self.state.enqueue_discovered(link, next_depth))
            .count();
        self.stats.links_enqueued += links_enqueued as u64;

        tracing::debug!(
            "Found {} in-scope links on {}, queued {}",
            links.len(),
            entry.url,
            links_enqueued
        );

        PageOutcome::Recorded {
            url: entry.url,
            depth: entry.depth,
            category,
            links_enqueued,
        }
    }

    /// Time since the first step, or zero before the crawl has started
    ///
    /// Unlike `stats().duration` this keeps counting while a fetch is in
    /// flight, so it is the right figure after an interrupted run.
    pub fn elapsed(&self) -> Duration {
        self.started.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Canonical base URL the crawl started from
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Pages recorded so far; valid at any point, including after an interrupt
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_inventory(self) -> Inventory {
        self.inventory
    }

    pub fn stats(&self) -> &CrawlStatistics {
        &self.stats
    }

    pub fn state(&self) -> &CrawlState {
        &self.state
    }
}

/// Runs a complete crawl over HTTP
///
/// # Example
///
/// ```no_run
/// use manual_mapper::config::load_config;
/// use manual_mapper::crawler::run_crawl;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("mapper.toml"))?;
/// let (inventory, stats) = run_crawl(config).await?;
/// println!("{} pages in {:?}", inventory.len(), stats.duration);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config) -> Result<(Inventory, CrawlStatistics)> {
    let mut coordinator = Coordinator::new(config)?;
    let stats = coordinator.run().await;
    Ok((coordinator.into_inventory(), stats))
}
