//! JSON report
//!
//! Pretty-printed with non-ASCII text (category labels, titles) kept verbatim.

use crate::config::OutputFormat;
use crate::inventory::{CategorizedIndex, PageRecord};
use crate::output::traits::{InventoryReport, OutputResult, Render};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Serialized shape of the JSON report
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    total_pages: usize,
    all_paths: &'a [PageRecord],
    categorized: &'a CategorizedIndex,
    base_url: &'a str,
    generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    config_hash: Option<&'a str>,
}

/// Renders the inventory as a JSON document
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Render for JsonRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn render(&self, report: &InventoryReport<'_>) -> OutputResult<String> {
        let document = JsonReport {
            total_pages: report.total_pages(),
            all_paths: report.inventory.all(),
            categorized: report.inventory.by_category(),
            base_url: &report.base_url,
            generated_at: report.generated_at,
            config_hash: report.config_hash.as_deref(),
        };

        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::inventory::Inventory;
    use serde_json::{json, Value};

    fn sample_inventory() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.record(
            PageRecord {
                url: "https://lme.jp/manual/".to_string(),
                path: "/manual/".to_string(),
                depth: 0,
                title: Some("マニュアル".to_string()),
            },
            Category::TopPage,
        );
        inventory.record(
            PageRecord {
                url: "https://lme.jp/manual/tutorial/intro".to_string(),
                path: "/manual/tutorial/intro".to_string(),
                depth: 1,
                title: None,
            },
            Category::Tutorial,
        );
        inventory
    }

    #[test]
    fn test_json_structure() {
        let inventory = sample_inventory();
        let report = InventoryReport::new("https://lme.jp/manual/", "Site", &inventory);

        let rendered = JsonRenderer.render(&report).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["total_pages"], json!(2));
        assert_eq!(value["base_url"], json!("https://lme.jp/manual/"));
        assert_eq!(value["all_paths"][0]["title"], json!("マニュアル"));
        assert!(value["all_paths"][1].get("title").is_none());
        assert_eq!(
            value["categorized"]["チュートリアル"],
            json!([{"url": "https://lme.jp/manual/tutorial/intro", "path": "/manual/tutorial/intro"}])
        );
        assert!(value.get("config_hash").is_none());
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_non_ascii_not_escaped() {
        let inventory = sample_inventory();
        let report = InventoryReport::new("https://lme.jp/manual/", "Site", &inventory);

        let rendered = JsonRenderer.render(&report).unwrap();
        assert!(rendered.contains("トップページ"));
        assert!(!rendered.contains("\\u"));
    }

    #[test]
    fn test_config_hash_included_when_known() {
        let inventory = Inventory::new();
        let report = InventoryReport::new("https://lme.jp/manual/", "Site", &inventory)
            .with_config_hash(Some("deadbeef".to_string()));

        let value: Value = serde_json::from_str(&JsonRenderer.render(&report).unwrap()).unwrap();
        assert_eq!(value["config_hash"], json!("deadbeef"));
        assert_eq!(value["total_pages"], json!(0));
        assert_eq!(value["categorized"], json!({}));
    }
}
