//! Press-Harvest main entry point
//!
//! This is the command-line interface for extracting structured posts from
//! WordPress-style blogs.

use anyhow::{bail, Context};
use clap::Parser;
use press_harvest::config::{load_config, Config};
use press_harvest::extract::{build_blog_with, ExtractOptions, ImageMode, PostStrategy};
use press_harvest::fetch::{format_user_agent, HttpFetcher};
use press_harvest::output::{write_output, OutputFormat};
use press_harvest::url::sequence_page_urls;
use press_harvest::{is_valid_url, Blog, HarvestError};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Number of page URLs listed per blog in a dry run
const DRY_RUN_PAGES: u32 = 3;

/// Press-Harvest: structured post extraction for WordPress-style blogs
///
/// Walks each blog's /page/N archive until a page comes back empty and
/// prints every post found (id, title, images, date, content).
#[derive(Parser, Debug)]
#[command(name = "press-harvest")]
#[command(version)]
#[command(about = "Extract structured posts from WordPress-style blogs", long_about = None)]
struct Cli {
    /// Blog URLs to extract
    #[arg(value_name = "URL")]
    urls: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Maximum number of archive pages per blog
    #[arg(short = 'p', long)]
    max_pages: Option<NonZeroU32>,

    /// How posts are located on a page
    #[arg(long, value_enum)]
    strategy: Option<PostStrategy>,

    /// Which images are collected per post
    #[arg(long, value_enum)]
    images: Option<ImageMode>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show the resolved settings and page URLs without fetching anything
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?
        }
        None => Config::default(),
    };

    let options = resolve_options(&cli, &config);
    let urls = collect_urls(&cli, &config);
    if urls.is_empty() {
        bail!("No blog URLs given (pass URLs or a config with [[blog]] entries)");
    }

    if cli.dry_run {
        handle_dry_run(&config, &options, &urls);
        return Ok(());
    }

    let format = cli.format.unwrap_or(config.output.format);
    let output_path = cli
        .output
        .clone()
        .or_else(|| config.output.path.as_ref().map(PathBuf::from));

    handle_extract(&config, &options, &urls, format, output_path.as_deref())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so that stdout carries only the rendered output.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("press_harvest=info,warn"),
            1 => EnvFilter::new("press_harvest=debug,info"),
            2 => EnvFilter::new("press_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Command-line flags override configuration values
fn resolve_options(cli: &Cli, config: &Config) -> ExtractOptions {
    let mut options = config.extractor.options();

    if let Some(max_pages) = cli.max_pages {
        options.max_pages = max_pages;
    }
    if let Some(strategy) = cli.strategy {
        options.post_strategy = strategy;
    }
    if let Some(images) = cli.images {
        options.image_mode = images;
    }

    options
}

/// Positional URLs first, then those from the configuration file
fn collect_urls(cli: &Cli, config: &Config) -> Vec<String> {
    cli.urls
        .iter()
        .cloned()
        .chain(config.blogs.iter().map(|entry| entry.url.clone()))
        .collect()
}

/// Handles the --dry-run mode: shows what would be fetched
fn handle_dry_run(config: &Config, options: &ExtractOptions, urls: &[String]) {
    println!("=== Press-Harvest Dry Run ===\n");

    println!("Extraction:");
    println!("  Max pages: {}", options.max_pages);
    println!("  Post strategy: {}", options.post_strategy);
    println!("  Image mode: {}", options.image_mode);

    println!("\nHTTP:");
    println!("  User agent: {}", format_user_agent(&config.user_agent));
    println!("  Timeout: {}s", config.http.timeout_secs);
    println!("  Connect timeout: {}s", config.http.connect_timeout_secs);

    println!("\nBlogs ({}):", urls.len());
    for url in urls {
        if url.is_empty() {
            println!("  - (empty, skipped)");
            continue;
        }
        if !is_valid_url(url) {
            println!("  - {} (invalid URL)", url);
            continue;
        }

        println!("  - {}", url);
        let preview = NonZeroU32::new(DRY_RUN_PAGES.min(options.max_pages.get()))
            .unwrap_or(NonZeroU32::MIN);
        for page_url in sequence_page_urls(url, preview) {
            println!("    * {}", page_url);
        }
        if options.max_pages.get() > DRY_RUN_PAGES {
            println!("    * ... up to page {}", options.max_pages);
        }
    }
}

/// Handles the main extraction
fn handle_extract(
    config: &Config,
    options: &ExtractOptions,
    urls: &[String],
    format: OutputFormat,
    output_path: Option<&Path>,
) -> anyhow::Result<()> {
    let mut fetcher = HttpFetcher::from_config(&config.user_agent, &config.http)
        .context("Failed to build HTTP client")?;

    let mut blogs: Vec<Blog> = Vec::new();
    for url in urls {
        tracing::info!("Extracting {}", url);
        match build_blog_with(url, &mut fetcher, options) {
            Ok(blog) => blogs.push(blog),
            Err(e @ HarvestError::InvalidUrl(_)) => {
                tracing::error!("{}", e);
            }
            Err(e) => return Err(e.into()),
        }
    }

    if blogs.is_empty() {
        bail!("No blog could be extracted");
    }

    let post_count: usize = blogs.iter().map(|blog| blog.posts.len()).sum();
    tracing::info!("Extracted {} posts from {} blogs", post_count, blogs.len());

    write_output(&blogs, format, output_path).context("Failed to write output")?;

    if let Some(path) = output_path {
        tracing::info!("Output written to: {}", path.display());
    }

    Ok(())
}
