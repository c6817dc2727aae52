//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end over real HTTP.

use manual_mapper::config::{Config, CrawlerConfig, OutputConfig, TargetConfig, UserAgentConfig};
use manual_mapper::crawler::Coordinator;
use manual_mapper::output::{write_reports, InventoryReport};
use manual_mapper::Category;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration rooted at `{server}/manual/`
fn create_test_config(server_uri: &str, max_depth: u32) -> Config {
    let authority = url::Url::parse(server_uri)
        .map(|u| format!("{}:{}", u.host_str().unwrap(), u.port().unwrap()))
        .expect("Failed to parse server URI");

    Config {
        target: TargetConfig {
            base_url: format!("{}/manual/", server_uri),
            host: authority,
            path_prefix: "/manual/".to_string(),
            ..TargetConfig::default()
        },
        crawler: CrawlerConfig {
            max_depth,
            request_timeout: 5,
            request_delay: 10, // Very short for testing
            ..CrawlerConfig::default()
        },
        user_agent: UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "1.0.0".to_string(),
            contact_url: Some("https://example.com/contact".to_string()),
        },
        output: OutputConfig::default(),
    }
}

/// Mounts an HTML page at `route`
async fn mount_page(server: &MockServer, route: &str, title: &str, links: &[&str]) {
    let anchors: String = links
        .iter()
        .map(|href| format!(r#"<a href="{}">{}</a>"#, href, href))
        .collect();

    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!(
                    "<html><head><title>{}</title></head><body>{}</body></html>",
                    title, anchors
                ))
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_crawl_single_site() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/manual/",
        "Manual",
        &[
            "tutorial/intro",
            "/manual/contact/form",
            "/manual/information/2024#latest",
            "/blog/outside",
        ],
    )
    .await;
    mount_page(&mock_server, "/manual/tutorial/intro", "Intro", &["../"]).await;
    mount_page(&mock_server, "/manual/contact/form", "Contact", &[]).await;
    mount_page(&mock_server, "/manual/information/2024", "News", &[]).await;

    let config = create_test_config(&base_url, 2);
    let mut coordinator = Coordinator::new(config).expect("Failed to create coordinator");
    let stats = coordinator.run().await;
    let inventory = coordinator.inventory();

    assert_eq!(inventory.len(), 4);
    assert_eq!(stats.recorded, 4);
    assert_eq!(stats.fetch_failed, 0);

    let home = inventory.find(&format!("{}/manual/", base_url)).unwrap();
    assert_eq!(home.depth, 0);
    assert_eq!(home.title.as_deref(), Some("Manual"));

    let index = inventory.by_category();
    assert_eq!(index.get(Category::TopPage).len(), 1);
    assert_eq!(index.get(Category::Tutorial).len(), 1);
    assert_eq!(index.get(Category::Contact).len(), 1);
    assert_eq!(index.get(Category::News)[0].path, "/manual/information/2024");

    // Out-of-prefix link never requested
    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.url.path().starts_with("/manual/")));
    assert_eq!(requests.len(), 4);
}

#[tokio::test]
async fn test_failed_page_does_not_stop_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/manual/", "Manual", &["/manual/missing", "/manual/ok/page"]).await;
    mount_page(&mock_server, "/manual/ok/page", "Ok", &[]).await;

    Mock::given(method("GET"))
        .and(path("/manual/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&base_url, 2);
    let mut coordinator = Coordinator::new(config).expect("Failed to create coordinator");
    let stats = coordinator.run().await;

    assert_eq!(stats.fetch_failed, 1);
    assert_eq!(coordinator.inventory().len(), 2);
    assert!(coordinator
        .inventory()
        .find(&format!("{}/manual/missing", base_url))
        .is_none());
}

#[tokio::test]
async fn test_excluded_extensions_not_requested() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/manual/",
        "Manual",
        &["/manual/logo.png", "/manual/style.css", "/manual/guide.pdf"],
    )
    .await;

    let config = create_test_config(&base_url, 2);
    let mut coordinator = Coordinator::new(config).expect("Failed to create coordinator");
    coordinator.run().await;

    assert_eq!(coordinator.inventory().len(), 1);
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_crawl_with_depth_limit() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/manual/", "Depth 0", &["/manual/level1/page"]).await;
    mount_page(&mock_server, "/manual/level1/page", "Depth 1", &["/manual/level2/page"]).await;
    mount_page(&mock_server, "/manual/level2/page", "Depth 2", &["/manual/level3/page"]).await;
    mount_page(&mock_server, "/manual/level3/page", "Depth 3", &[]).await;

    let config = create_test_config(&base_url, 2);
    let mut coordinator = Coordinator::new(config).expect("Failed to create coordinator");
    let stats = coordinator.run().await;

    assert_eq!(coordinator.inventory().len(), 3);
    assert_eq!(stats.skipped_depth, 1);

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.url.path() != "/manual/level3/page"));
}

#[tokio::test]
async fn test_requests_carry_user_agent() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/manual/"))
        .and(header("user-agent", "TestBot/1.0.0 (+https://example.com/contact)"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>ok</body></html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&base_url, 0);
    let mut coordinator = Coordinator::new(config).expect("Failed to create coordinator");
    coordinator.run().await;

    assert_eq!(coordinator.inventory().len(), 1);
}

#[tokio::test]
async fn test_reports_written_after_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/manual/", "Manual", &["/manual/tutorial/first"]).await;
    mount_page(&mock_server, "/manual/tutorial/first", "First", &[]).await;

    let output_dir = TempDir::new().unwrap();
    let mut config = create_test_config(&base_url, 1);
    config.output.directory = output_dir.path().to_string_lossy().into_owned();

    let mut coordinator = Coordinator::new(config).expect("Failed to create coordinator");
    coordinator.run().await;

    let output = &coordinator.config().output;
    let report = InventoryReport::new(coordinator.base_url(), &output.site_title, coordinator.inventory());
    let written = write_reports(&report, output).expect("Failed to write reports");
    assert_eq!(written.len(), 3);

    let json: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(output_dir.path().join("manual_paths.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(json["total_pages"], serde_json::json!(2));
    assert_eq!(json["categorized"]["チュートリアル"][0]["path"], "/manual/tutorial/first");

    let text = std::fs::read_to_string(output_dir.path().join("manual_paths.txt")).unwrap();
    assert!(text.contains("総ページ数: 2"));
    assert!(text.contains("  • /manual/tutorial/first\n"));

    let markdown = std::fs::read_to_string(output_dir.path().join("README.md")).unwrap();
    assert!(markdown.contains(&format!(
        "- [/manual/tutorial/first]({}/manual/tutorial/first)",
        base_url
    )));
}
