//! Plain-text report

use crate::config::OutputFormat;
use crate::output::traits::{InventoryReport, OutputResult, Render};

const RULE_WIDTH: usize = 80;

/// Renders the inventory as a plain-text listing grouped by category
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl Render for TextRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Text
    }

    fn render(&self, report: &InventoryReport<'_>) -> OutputResult<String> {
        Ok(format_text_report(report))
    }
}

/// Formats the text report
pub fn format_text_report(report: &InventoryReport<'_>) -> String {
    let heavy_rule = "=".repeat(RULE_WIDTH);
    let light_rule = "-".repeat(RULE_WIDTH);
    let mut text = String::new();

    text.push_str(&format!("{}\n", heavy_rule));
    text.push_str(&format!("{} - 全URLパス一覧\n", report.site_title));
    text.push_str(&format!("総ページ数: {}\n", report.total_pages()));
    text.push_str(&format!("{}\n\n", heavy_rule));

    for (category, entries) in report.inventory.by_category().sorted_by_label() {
        text.push_str(&format!(
            "\n【{}】 ({}ページ)\n",
            category.label(),
            entries.len()
        ));
        text.push_str(&format!("{}\n", light_rule));
        for entry in entries {
            text.push_str(&format!("  • {}\n", entry.path));
            text.push_str(&format!("    {}\n\n", entry.url));
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::inventory::{Inventory, PageRecord};

    fn record(inventory: &mut Inventory, path: &str, category: Category) {
        inventory.record(
            PageRecord {
                url: format!("https://lme.jp{}", path),
                path: path.to_string(),
                depth: 1,
                title: None,
            },
            category,
        );
    }

    #[test]
    fn test_header() {
        let inventory = Inventory::new();
        let report = InventoryReport::new("https://lme.jp/manual/", "Docs", &inventory);
        let text = format_text_report(&report);

        let expected = format!("{0}\nDocs - 全URLパス一覧\n総ページ数: 0\n{0}\n\n", "=".repeat(80));
        assert_eq!(text, expected);
    }

    #[test]
    fn test_category_sections() {
        let mut inventory = Inventory::new();
        record(&mut inventory, "/manual/z/page", Category::Article);
        record(&mut inventory, "/manual/tutorial/b", Category::Tutorial);
        record(&mut inventory, "/manual/a/page", Category::Article);

        let report = InventoryReport::new("https://lme.jp/manual/", "Docs", &inventory);
        let text = format_text_report(&report);

        assert!(text.contains("\n【チュートリアル】 (1ページ)\n"));
        assert!(text.contains("\n【記事・マニュアル】 (2ページ)\n"));
        assert!(text.contains("  • /manual/a/page\n    https://lme.jp/manual/a/page\n\n"));

        // Label order, then path order within a category
        let tutorial = text.find("チュートリアル").unwrap();
        let article = text.find("記事・マニュアル").unwrap();
        assert!(tutorial < article);
        assert!(text.find("/manual/a/page").unwrap() < text.find("/manual/z/page").unwrap());
    }
}
