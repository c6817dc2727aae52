//! Output module for rendering crawl reports
//!
//! This module handles:
//! - Rendering the inventory as JSON, plain text and Markdown
//! - Writing every configured report into the output directory
//! - Collecting and printing crawl statistics

mod json;
mod markdown;
pub mod stats;
mod text;
mod traits;

pub use json::JsonRenderer;
pub use markdown::{format_markdown_report, MarkdownRenderer};
pub use stats::{format_statistics, print_statistics, CrawlStatistics};
pub use text::{format_text_report, TextRenderer};
pub use traits::{InventoryReport, OutputError, OutputResult, Render};

use crate::config::{OutputConfig, OutputFormat};
use std::fs;
use std::path::PathBuf;

/// Returns the renderer for an output format
pub fn renderer_for(format: OutputFormat) -> Box<dyn Render> {
    match format {
        OutputFormat::Json => Box::new(JsonRenderer),
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Markdown => Box::new(MarkdownRenderer),
    }
}

/// Renders and writes every configured report
///
/// The output directory is created if needed. Existing files are replaced.
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Paths written, in configured format order
/// * `Err(OutputError)` - Rendering or writing failed
pub fn write_reports(report: &InventoryReport<'_>, config: &OutputConfig) -> OutputResult<Vec<PathBuf>> {
    let directory = PathBuf::from(&config.directory);
    fs::create_dir_all(&directory)?;

    let mut written = Vec::with_capacity(config.formats.len());
    for format in &config.formats {
        let renderer = renderer_for(*format);
        let contents = renderer.render(report)?;
        let path = directory.join(config.file_name(*format));

        fs::write(&path, contents).map_err(|e| {
            OutputError::Write(format!("{}: {}", path.display(), e))
        })?;

        tracing::info!("Wrote {:?} report to {}", format, path.display());
        written.push(path);
    }

    Ok(written)
}
