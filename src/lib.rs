//! Manual-Mapper: an inventory crawler for a single documentation site
//!
//! This crate walks every reachable page below one path prefix of one host,
//! breadth first and politely, sorts each page into a topical category based
//! on its URL, and renders the resulting inventory as JSON, text and Markdown.

pub mod category;
pub mod config;
pub mod crawler;
pub mod inventory;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Manual-Mapper operations
#[derive(Debug, Error)]
pub enum MapperError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for Manual-Mapper operations
pub type Result<T> = std::result::Result<T, MapperError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use category::{classify, classify_url, Category};
pub use config::Config;
pub use inventory::{CategorizedIndex, Inventory, PageRecord};
pub use state::{PageOutcome, SkipReason};
pub use url::ScopeFilter;
