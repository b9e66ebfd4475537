//! Press-Harvest: structured post extraction for WordPress-style blogs
//!
//! This crate walks a blog's `/page/N` archive, finds the posts on every page
//! and turns each one into a [`Post`] record (id, title, images, publish date,
//! content markup), collecting them into a single [`Blog`].

pub mod config;
pub mod extract;
pub mod fetch;
pub mod model;
pub mod output;
pub mod url;
pub mod variables;

use thiserror::Error;

/// Main error type for Press-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Invalid blog url \"{0}\"")]
    InvalidUrl(String),

    #[error("Invalid CSS selector '{0}'")]
    Selector(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Press-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use extract::{build_blog, build_blog_with, ExtractOptions, ImageMode, PostStrategy};
pub use fetch::{HttpFetcher, PageContent, PageFetcher};
pub use model::{null_date, Blog, Post};
pub use url::{is_valid_url, PageUrls};
