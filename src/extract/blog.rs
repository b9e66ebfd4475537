//! Blog assembly
//!
//! Validates the blog URL, resolves the blog title from the front page,
//! walks the archive pages and collects every post in page order, then
//! document order.

use crate::extract::{traverse_pages, ExtractOptions, PostExtractor, PostLocator, TitleResolver};
use crate::fetch::{PageContent, PageFetcher};
use crate::model::Blog;
use crate::url::is_valid_url;
use crate::HarvestError;
use std::num::NonZeroU32;

/// Builds a blog using the default post strategy and image mode
///
/// See [`build_blog_with`].
pub fn build_blog<F: PageFetcher + ?Sized>(
    url: &str,
    fetcher: &mut F,
    max_pages: NonZeroU32,
) -> Result<Blog, HarvestError> {
    let options = ExtractOptions {
        max_pages,
        ..ExtractOptions::default()
    };
    build_blog_with(url, fetcher, &options)
}

/// Builds a blog from its URL
///
/// # Arguments
///
/// * `url` - The blog's base URL
/// * `fetcher` - Source of page content
/// * `options` - Page budget and extraction strategies
///
/// # Returns
///
/// * `Ok(Blog::empty())` - `url` is empty; nothing is fetched
/// * `Ok(Blog)` - The assembled blog. Posts that could not be parsed are
///   kept as `Post::empty()` entries so that positions are preserved
/// * `Err(HarvestError::InvalidUrl)` - `url` is not an absolute URL
///
/// # Example
///
/// ```
/// use press_harvest::{build_blog, PageContent};
/// use std::num::NonZeroU32;
///
/// let mut fetcher = |_: &str| PageContent::Absent;
/// let blog = build_blog("http://someblog.net", &mut fetcher, NonZeroU32::MIN).unwrap();
/// assert_eq!(blog.url, "http://someblog.net");
/// assert!(blog.posts.is_empty());
/// ```
pub fn build_blog_with<F: PageFetcher + ?Sized>(
    url: &str,
    fetcher: &mut F,
    options: &ExtractOptions,
) -> Result<Blog, HarvestError> {
    if url.is_empty() {
        return Ok(Blog::empty());
    }

    if !is_valid_url(url) {
        return Err(HarvestError::InvalidUrl(url.to_string()));
    }

    let locator = PostLocator::new(options.post_strategy)?;
    let extractor = PostExtractor::new(options.image_mode)?;
    let title_resolver = TitleResolver::new()?;

    let title = match fetcher.fetch(url) {
        PageContent::Present(document) => title_resolver.resolve(&document),
        PageContent::Absent => {
            tracing::debug!("Front page of {} unavailable, title left empty", url);
            String::new()
        }
    };

    let mut posts = Vec::new();
    let mut page_count = 0;

    for page in traverse_pages(url, fetcher, options.max_pages) {
        let before = posts.len();
        posts.extend(
            locator
                .find_posts(&page.document)
                .map(|fragment| extractor.extract(fragment)),
        );
        page_count += 1;

        tracing::debug!("Found {} posts on {}", posts.len() - before, page.url);
    }

    tracing::info!(
        "Extracted {} posts from {} pages of {} ({} strategy)",
        posts.len(),
        page_count,
        url,
        options.post_strategy
    );

    Ok(Blog {
        title,
        subtitle: String::new(),
        url: url.to_string(),
        posts,
    })
}
