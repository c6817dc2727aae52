//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the HTTP client with an identifying user agent and timeout
//! - GET requests to fetch page content
//! - Error classification (HTTP status, timeout, connection failure)

use crate::config::{CrawlerConfig, UserAgentConfig};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// The server answered with a non-success status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, body read failure)
    NetworkError {
        /// Error description
        error: String,
        /// Whether the request hit the configured timeout
        timed_out: bool,
    },
}

impl FetchResult {
    /// Returns true for failures that may succeed on another attempt
    ///
    /// Timeouts, connection failures and 5xx responses are retryable;
    /// 4xx responses are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Success { .. } => false,
            Self::HttpError { status_code } => *status_code >= 500,
            Self::NetworkError { .. } => true,
        }
    }

    /// Short failure description for logs
    pub fn failure_reason(&self) -> Option<String> {
        match self {
            Self::Success { .. } => None,
            Self::HttpError { status_code } => Some(format!("HTTP {}", status_code)),
            Self::NetworkError { error, .. } => Some(error.clone()),
        }
    }
}

/// Capability to fetch a page body by URL
///
/// The crawl loop only depends on this trait, so tests can serve pages from
/// memory instead of the network.
pub trait Fetch {
    fn fetch(&self, url: &str) -> impl Future<Output = FetchResult> + Send;
}

/// [`Fetch`] implementation backed by a shared `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds the client from configuration and wraps it
    pub fn from_config(
        user_agent: &UserAgentConfig,
        crawler: &CrawlerConfig,
    ) -> Result<Self, reqwest::Error> {
        build_http_client(user_agent, Duration::from_secs(crawler.request_timeout)).map(Self::new)
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        fetch_url(&self.client, url).await
    }
}

/// Builds an HTTP client with proper configuration
///
/// The client is created once per crawl and carries the session settings:
/// the `User-Agent` header and the per-request timeout.
///
/// # Example
///
/// ```no_run
/// use manual_mapper::config::UserAgentConfig;
/// use manual_mapper::crawler::build_http_client;
/// use std::time::Duration;
///
/// let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(10)).unwrap();
/// ```
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .timeout(timeout)
        .connect_timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the result
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx with readable body | `Success` |
/// | any other status | `HttpError` |
/// | timeout | `NetworkError { timed_out: true }` |
/// | connection or body error | `NetworkError { timed_out: false }` |
///
/// Redirects are followed by the client.
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => return classify_error(&e),
    };

    let status = response.status();
    let final_url = response.url().to_string();

    if !status.is_success() {
        return FetchResult::HttpError {
            status_code: status.as_u16(),
        };
    }

    match response.text().await {
        Ok(body) => FetchResult::Success {
            final_url,
            status_code: status.as_u16(),
            body,
        },
        Err(e) => classify_error(&e),
    }
}

fn classify_error(error: &reqwest::Error) -> FetchResult {
    if error.is_timeout() {
        FetchResult::NetworkError {
            error: "Request timeout".to_string(),
            timed_out: true,
        }
    } else if error.is_connect() {
        FetchResult::NetworkError {
            error: format!("Connection failed: {}", error),
            timed_out: false,
        }
    } else {
        FetchResult::NetworkError {
            error: error.to_string(),
            timed_out: false,
        }
    }
}
