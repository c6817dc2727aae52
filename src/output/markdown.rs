//! Markdown report generation
//!
//! This module renders the inventory as a Markdown index suitable for a
//! repository README: a page count, then one section per category with a
//! link for every page.

use crate::config::OutputFormat;
use crate::output::traits::{InventoryReport, OutputResult, Render};

/// Renders the inventory as Markdown
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl Render for MarkdownRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }

    fn render(&self, report: &InventoryReport<'_>) -> OutputResult<String> {
        Ok(format_markdown_report(report))
    }
}

/// Formats the inventory as markdown
///
/// # Arguments
///
/// * `report` - The inventory and its metadata
///
/// # Returns
///
/// A formatted markdown string
pub fn format_markdown_report(report: &InventoryReport<'_>) -> String {
    let mut md = String::new();

    // Title
    md.push_str(&format!("# {} URL一覧\n\n", report.site_title));
    md.push_str(&format!("**総ページ数:** {}\n\n", report.total_pages()));
    md.push_str(&format!(
        "このリポジトリは {} のすべてのURLパスを取得・整理したものです。\n\n",
        report.base_url
    ));

    // Per-category listing
    md.push_str("## カテゴリ別URL一覧\n\n");
    for (category, entries) in report.inventory.by_category().sorted_by_label() {
        md.push_str(&format!("### {} ({}ページ)\n\n", category.label(), entries.len()));
        for entry in entries {
            md.push_str(&format!("- [{}]({})\n", entry.path, entry.url));
        }
        md.push('\n');
    }

    md
}
