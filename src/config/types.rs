use crate::extract::{ExtractOptions, ImageMode, PostStrategy, DEFAULT_MAX_PAGES};
use crate::output::OutputFormat;
use serde::Deserialize;
use std::num::NonZeroU32;

/// Main configuration structure for Press-Harvest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub extractor: ExtractorConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default, rename = "blog")]
    pub blogs: Vec<BlogEntry>,
}

/// Extraction behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractorConfig {
    /// Maximum number of archive pages requested per blog
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: u32,

    /// How posts are located on a page
    #[serde(rename = "post-strategy", default)]
    pub post_strategy: PostStrategy,

    /// Which images are collected per post
    #[serde(rename = "image-mode", default)]
    pub image_mode: ImageMode,
}

impl ExtractorConfig {
    /// Converts to extraction options
    ///
    /// A zero page budget, which validation rejects, falls back to one page.
    pub fn options(&self) -> ExtractOptions {
        ExtractOptions {
            max_pages: NonZeroU32::new(self.max_pages).unwrap_or(NonZeroU32::MIN),
            post_strategy: self.post_strategy,
            image_mode: self.image_mode,
        }
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_pages: default_max_pages(),
            post_strategy: PostStrategy::default(),
            image_mode: ImageMode::default(),
        }
    }
}

fn default_max_pages() -> u32 {
    DEFAULT_MAX_PAGES.get()
}

/// User agent identification configuration
///
/// Missing fields take their default values.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the harvester
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the harvester
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the harvester
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for harvester-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "PressHarvest".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://example.com/about".to_string(),
            contact_email: "admin@example.com".to_string(),
        }
    }
}

/// HTTP timeouts
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Whole-request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection timeout in seconds
    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Rendering of the extracted blogs
    #[serde(default)]
    pub format: OutputFormat,

    /// File to write to; stdout when absent
    pub path: Option<String>,
}

/// A blog to extract
#[derive(Debug, Clone, Deserialize)]
pub struct BlogEntry {
    /// The blog's base URL
    pub url: String,
}
