//! HTML parser for extracting links and metadata
//!
//! This module handles parsing fetched markup to extract:
//! - Anchor hrefs (`<a href="...">`)
//! - The page title
//! - The set of in-scope, fragment-free absolute URLs a page links to

use crate::url::{strip_fragment, ScopeFilter};
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use url::Url;

/// Extracted information from an HTML page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// The page title (from <title> tag)
    pub title: Option<String>,

    /// Raw href values of every anchor, in document order
    pub hrefs: Vec<String>,
}

/// Parses markup and extracts the title and anchor hrefs
///
/// The underlying parser is error tolerant: broken markup still yields
/// whatever anchors can be recovered, and never an error.
///
/// # Example
///
/// ```
/// use manual_mapper::crawler::parse_html;
///
/// let html = r#"<html><head><title>Test</title></head><body><a href="/page">Link</a></body></html>"#;
/// let parsed = parse_html(html);
/// assert_eq!(parsed.title, Some("Test".to_string()));
/// assert_eq!(parsed.hrefs, vec!["/page".to_string()]);
/// ```
pub fn parse_html(html: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        title: extract_title(&document),
        hrefs: collect_hrefs(&document),
    }
}

/// Returns the href of every `<a href>` element in document order
pub fn extract_anchor_hrefs(html: &str) -> Vec<String> {
    collect_hrefs(&Html::parse_document(html))
}

/// Resolves, cleans and filters the links in a page
///
/// Each href is resolved against `base_url` using standard relative URL
/// resolution, its fragment is removed, and only URLs accepted by `filter`
/// are kept. The result has no duplicates and a stable (sorted) order.
///
/// An unparseable `base_url` yields an empty set.
///
/// # Example
///
/// ```
/// use manual_mapper::crawler::extract_links;
/// use manual_mapper::url::ScopeFilter;
///
/// let filter = ScopeFilter::new("lme.jp", "/manual/", vec![".png".to_string()]);
/// let html = r#"<a href="tutorial/intro#step1">Intro</a><a href="logo.png">Logo</a>"#;
/// let links = extract_links(html, "https://lme.jp/manual/", &filter);
/// assert_eq!(links.len(), 1);
/// assert!(links.contains("https://lme.jp/manual/tutorial/intro"));
/// ```
pub fn extract_links(html: &str, base_url: &str, filter: &ScopeFilter) -> BTreeSet<String> {
    let base = match Url::parse(base_url) {
        Ok(base) => base,
        Err(e) => {
            tracing::debug!("Cannot resolve links against {}: {}", base_url, e);
            return BTreeSet::new();
        }
    };

    resolve_links(&extract_anchor_hrefs(html), &base, filter)
}

/// Resolves already extracted hrefs against a base URL
pub fn resolve_links(hrefs: &[String], base: &Url, filter: &ScopeFilter) -> BTreeSet<String> {
    hrefs
        .iter()
        .filter_map(|href| resolve_link(href, base))
        .filter(|url| filter.is_url_in_scope(url))
        .map(|url| url.to_string())
        .collect()
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

fn collect_hrefs(document: &Html) -> Vec<String> {
    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&a_selector)
        .filter_map(|element| element.value().attr("href"))
        .map(|href| href.to_string())
        .collect()
}

/// Resolves an href to an absolute URL without its fragment
///
/// Returns None if the href cannot be resolved.
fn resolve_link(href: &str, base: &Url) -> Option<Url> {
    let mut absolute = base.join(href.trim()).ok()?;
    strip_fragment(&mut absolute);
    Some(absolute)
}
