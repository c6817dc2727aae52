use serde::Deserialize;

/// Main configuration structure for Manual-Mapper
///
/// Every section falls back to the defaults below, so an empty file (or no
/// file at all) maps the L Message manual site.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub target: TargetConfig,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// The site being mapped
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// URL the crawl starts from (depth 0)
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Host (and non-default port) every in-scope URL must have
    pub host: String,

    /// Path prefix every in-scope URL must start with
    #[serde(rename = "path-prefix")]
    pub path_prefix: String,

    /// Path suffixes that mark non-page assets
    #[serde(rename = "excluded-extensions")]
    pub excluded_extensions: Vec<String>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: "https://lme.jp/manual/".to_string(),
            host: "lme.jp".to_string(),
            path_prefix: "/manual/".to_string(),
            excluded_extensions: [".jpg", ".png", ".gif", ".css", ".js", ".pdf"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum depth to crawl from the base URL (inclusive)
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Per-request timeout (seconds)
    #[serde(rename = "request-timeout")]
    pub request_timeout: u64,

    /// Minimum spacing between successive fetch attempts (milliseconds)
    #[serde(rename = "request-delay")]
    pub request_delay: u64,

    /// Extra attempts for timeouts, connection errors and 5xx responses
    #[serde(rename = "max-retries")]
    pub max_retries: u32,

    /// Skip enqueueing a URL that is already pending in the frontier
    #[serde(rename = "dedupe-frontier")]
    pub dedupe_frontier: bool,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: 2,
            request_timeout: 10,
            request_delay: 500,
            max_retries: 0,
            dedupe_frontier: false,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: Option<String>,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "manual-mapper".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: None,
        }
    }
}

impl UserAgentConfig {
    /// Formats the `User-Agent` header value
    ///
    /// Format: `CrawlerName/Version` or `CrawlerName/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        match &self.contact_url {
            Some(contact) => format!(
                "{}/{} (+{})",
                self.crawler_name, self.crawler_version, contact
            ),
            None => format!("{}/{}", self.crawler_name, self.crawler_version),
        }
    }
}

/// Report formats that can be written after a crawl
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Text,
    Markdown,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the reports are written into
    pub directory: String,

    /// Site name used in report headings
    #[serde(rename = "site-title")]
    pub site_title: String,

    #[serde(rename = "json-file")]
    pub json_file: String,

    #[serde(rename = "text-file")]
    pub text_file: String,

    #[serde(rename = "markdown-file")]
    pub markdown_file: String,

    /// Which reports to write
    pub formats: Vec<OutputFormat>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            site_title: "L Message マニュアルサイト".to_string(),
            json_file: "manual_paths.json".to_string(),
            text_file: "manual_paths.txt".to_string(),
            markdown_file: "README.md".to_string(),
            formats: vec![OutputFormat::Json, OutputFormat::Text, OutputFormat::Markdown],
        }
    }
}

impl OutputConfig {
    /// File name configured for a report format
    pub fn file_name(&self, format: OutputFormat) -> &str {
        match format {
            OutputFormat::Json => &self.json_file,
            OutputFormat::Text => &self.text_file,
            OutputFormat::Markdown => &self.markdown_file,
        }
    }
}
