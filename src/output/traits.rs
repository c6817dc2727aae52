//! Renderer trait and report types
//!
//! This module defines the trait interface for report renderers and the
//! data every renderer reads from.

use crate::config::OutputFormat;
use crate::inventory::Inventory;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Everything a renderer needs to produce one report
#[derive(Debug, Clone)]
pub struct InventoryReport<'a> {
    /// Canonical base URL the crawl started from
    pub base_url: String,

    /// Human-readable site name used in headings
    pub site_title: String,

    /// When the report was produced
    pub generated_at: DateTime<Utc>,

    /// SHA-256 of the configuration file, when one was loaded
    pub config_hash: Option<String>,

    pub inventory: &'a Inventory,
}

impl<'a> InventoryReport<'a> {
    /// Creates a report stamped with the current time
    pub fn new(
        base_url: impl Into<String>,
        site_title: impl Into<String>,
        inventory: &'a Inventory,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            site_title: site_title.into(),
            generated_at: Utc::now(),
            config_hash: None,
            inventory,
        }
    }

    pub fn with_config_hash(mut self, hash: Option<String>) -> Self {
        self.config_hash = hash;
        self
    }

    pub fn total_pages(&self) -> usize {
        self.inventory.len()
    }
}

/// Trait for report renderers
///
/// A renderer turns an inventory into the full text of one output file.
/// Rendering is pure; writing the result is left to the caller.
pub trait Render {
    /// The output format this renderer produces
    fn format(&self) -> OutputFormat;

    /// Renders the complete report
    ///
    /// # Arguments
    ///
    /// * `report` - The inventory and its metadata
    ///
    /// # Returns
    ///
    /// The file contents, or an error if serialization failed
    fn render(&self, report: &InventoryReport<'_>) -> OutputResult<String>;
}
