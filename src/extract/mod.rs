//! Extraction pipeline
//!
//! This module contains the blog extraction logic, including:
//! - Lazy traversal of `/page/N` archive pages
//! - Locating post fragments on each page
//! - Per-post field extraction (title, images, date, content)
//! - Blog title resolution and final assembly

mod blog;
mod date;
mod locator;
mod post;
mod title;
mod traversal;

pub use blog::{build_blog, build_blog_with};
pub use date::{parse_date, try_parse_date};
pub use locator::{PostFragments, PostLocator};
pub use post::{extract_post, PostExtractor};
pub use title::{resolve_blog_title, TitleResolver};
pub use traversal::{traverse_pages, Page, Pages};

use crate::HarvestError;
use scraper::Selector;
use serde::Deserialize;
use std::fmt;
use std::num::NonZeroU32;

/// Default number of archive pages visited per blog
pub const DEFAULT_MAX_PAGES: NonZeroU32 = match NonZeroU32::new(10) {
    Some(pages) => pages,
    None => NonZeroU32::MIN,
};

/// How post containers are recognised on a page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PostStrategy {
    /// Every element whose `id` starts with `post-`, anywhere in the page
    #[default]
    Identifier,

    /// Every `<article>` inside the page's `<main>` region (alternate mode)
    Tag,
}

/// Which images are collected for a post
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ImageMode {
    /// Every `<img src>` in the post, in document order
    #[default]
    All,

    /// Only the first thumbnail or header image (alternate mode)
    Thumbnail,
}

impl fmt::Display for PostStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier => write!(f, "identifier"),
            Self::Tag => write!(f, "tag"),
        }
    }
}

impl fmt::Display for ImageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Thumbnail => write!(f, "thumbnail"),
        }
    }
}

/// Options for one blog extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Upper bound on archive pages requested
    pub max_pages: NonZeroU32,

    /// Post location strategy
    pub post_strategy: PostStrategy,

    /// Image collection mode
    pub image_mode: ImageMode,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            post_strategy: PostStrategy::default(),
            image_mode: ImageMode::default(),
        }
    }
}

/// Compiles a CSS selector
pub(crate) fn compile_selector(css: &str) -> Result<Selector, HarvestError> {
    Selector::parse(css).map_err(|_| HarvestError::Selector(css.to_string()))
}
