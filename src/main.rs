//! Manual-Mapper main entry point
//!
//! This is the command-line interface for the Manual-Mapper site inventory crawler.

use clap::Parser;
use manual_mapper::config::{load_config_with_hash, validate, Config};
use manual_mapper::crawler::Coordinator;
use manual_mapper::output::{print_statistics, write_reports, InventoryReport};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Manual-Mapper: a polite inventory crawler for one documentation site
///
/// Manual-Mapper walks every page below a path prefix of a single host,
/// sorts each page into a category by its URL, and writes the inventory as
/// JSON, text and Markdown.
#[derive(Parser, Debug)]
#[command(name = "manual-mapper")]
#[command(version)]
#[command(about = "A polite documentation site inventory crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,

    /// Override the maximum link depth
    #[arg(long, value_name = "N")]
    max_depth: Option<u32>,

    /// Override the report output directory
    #[arg(long, value_name = "DIR")]
    output_dir: Option<String>,

    /// Override the delay between requests in milliseconds
    #[arg(long, value_name = "MS")]
    delay: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, or fall back to defaults
    let (mut config, config_hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    (cfg, Some(hash))
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            (Config::default(), None)
        }
    };

    apply_overrides(&mut config, &cli);
    if let Err(e) = validate(&config) {
        tracing::error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    if cli.dry_run {
        handle_dry_run(&config);
    } else {
        handle_crawl(config, config_hash).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("manual_mapper=info,warn"),
            1 => EnvFilter::new("manual_mapper=debug,info"),
            2 => EnvFilter::new("manual_mapper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Applies command-line overrides on top of the loaded configuration
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(depth) = cli.max_depth {
        config.crawler.max_depth = depth;
    }
    if let Some(dir) = &cli.output_dir {
        config.output.directory = dir.clone();
    }
    if let Some(delay) = cli.delay {
        config.crawler.request_delay = delay;
    }
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Manual-Mapper Dry Run ===\n");

    println!("Target:");
    println!("  Base URL: {}", config.target.base_url);
    println!("  Host: {}", config.target.host);
    println!("  Path prefix: {}", config.target.path_prefix);
    println!(
        "  Excluded extensions: {}",
        config.target.excluded_extensions.join(" ")
    );

    println!("\nCrawler Configuration:");
    println!("  Max depth: {}", config.crawler.max_depth);
    println!("  Request timeout: {}s", config.crawler.request_timeout);
    println!("  Request delay: {}ms", config.crawler.request_delay);
    println!("  Max retries: {}", config.crawler.max_retries);
    println!("  Frontier dedupe: {}", config.crawler.dedupe_frontier);

    println!("\nUser Agent:");
    println!("  {}", config.user_agent.header_value());

    println!("\nOutput:");
    println!("  Directory: {}", config.output.directory);
    for format in &config.output.formats {
        println!("  - {:?}: {}", format, config.output.file_name(*format));
    }

    println!("\n✓ Configuration is valid");
    println!("✓ Would start crawling from {}", config.target.base_url);
}

/// Handles the main crawl operation
async fn handle_crawl(
    config: Config,
    config_hash: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut coordinator = Coordinator::new(config)?;

    // The crawl future is dropped on Ctrl-C; recorded pages stay intact
    let interrupted = tokio::select! {
        _ = coordinator.run() => false,
        Ok(()) = tokio::signal::ctrl_c() => {
            tracing::warn!("Interrupted, writing partial reports");
            true
        }
    };

    let mut stats = coordinator.stats().clone();
    if interrupted {
        stats.duration = coordinator.elapsed();
    }
    let output = &coordinator.config().output;
    let report = InventoryReport::new(
        coordinator.base_url(),
        &output.site_title,
        coordinator.inventory(),
    )
    .with_config_hash(config_hash);

    let written = match write_reports(&report, output) {
        Ok(paths) => paths,
        Err(e) => {
            tracing::error!("Failed to write reports: {}", e);
            return Err(e.into());
        }
    };

    println!();
    for path in &written {
        println!("✓ Wrote {}", path.display());
    }
    println!();
    print_statistics(&stats, coordinator.inventory());

    if interrupted {
        tracing::warn!("Crawl was interrupted; reports are partial");
    }

    Ok(())
}
