//! Request pacing for the crawl loop
//!
//! The crawl is strictly sequential and polite: successive fetch attempts
//! (including failed ones and retries) start at least `request-delay`
//! milliseconds apart.

use crate::config::CrawlerConfig;
use std::time::Duration;
use tokio::time::Instant;

/// Enforces a fixed minimum spacing between fetch attempts
#[derive(Debug)]
pub struct Scheduler {
    /// Minimum time between the starts of two fetch attempts
    delay: Duration,

    /// When the previous attempt was released
    last_request: Option<Instant>,

    /// Number of attempts released so far
    requests: u64,
}

impl Scheduler {
    /// Creates a scheduler with an explicit delay
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_request: None,
            requests: 0,
        }
    }

    /// Creates a scheduler from the crawler configuration
    pub fn from_config(config: &CrawlerConfig) -> Self {
        Self::new(Duration::from_millis(config.request_delay))
    }

    /// Waits until the next fetch attempt may start, then claims the slot
    ///
    /// The first call returns immediately. Later calls sleep until `delay`
    /// has passed since the previous slot was claimed.
    pub async fn wait_turn(&mut self) {
        if let Some(wait) = self.time_until_ready(Instant::now()) {
            tracing::trace!("Waiting {:?} before next request", wait);
            tokio::time::sleep(wait).await;
        }

        self.last_request = Some(Instant::now());
        self.requests += 1;
    }

    /// Time left before another attempt may start, if any
    pub fn time_until_ready(&self, now: Instant) -> Option<Duration> {
        let last = self.last_request?;
        let ready_at = last + self.delay;
        if ready_at > now {
            Some(ready_at - now)
        } else {
            None
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Number of fetch attempts released so far
    pub fn requests(&self) -> u64 {
        self.requests
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let config = CrawlerConfig {
            request_delay: 750,
            ..CrawlerConfig::default()
        };
        let scheduler = Scheduler::from_config(&config);
        assert_eq!(scheduler.delay(), Duration::from_millis(750));
        assert_eq!(scheduler.requests(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_request_is_immediate() {
        let mut scheduler = Scheduler::new(Duration::from_millis(500));
        let start = Instant::now();

        scheduler.wait_turn().await;

        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(scheduler.requests(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_requests_are_spaced() {
        let mut scheduler = Scheduler::new(Duration::from_millis(500));
        let start = Instant::now();

        scheduler.wait_turn().await;
        scheduler.wait_turn().await;
        scheduler.wait_turn().await;

        assert!(start.elapsed() >= Duration::from_millis(1000));
        assert_eq!(scheduler.requests(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_elapsed_work_counts_towards_delay() {
        let mut scheduler = Scheduler::new(Duration::from_millis(500));

        scheduler.wait_turn().await;
        tokio::time::sleep(Duration::from_millis(300)).await;

        let remaining = scheduler.time_until_ready(Instant::now()).unwrap();
        assert_eq!(remaining, Duration::from_millis(200));

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert!(scheduler.time_until_ready(Instant::now()).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_never_waits() {
        let mut scheduler = Scheduler::new(Duration::ZERO);
        let start = Instant::now();

        for _ in 0..5 {
            scheduler.wait_turn().await;
        }

        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
