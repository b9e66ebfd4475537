//! Lazy archive page traversal
//!
//! Pages are requested one at a time, in order, only when the consumer asks
//! for the next one. The first `Absent` page ends the traversal: the archive
//! is assumed exhausted and no later page is requested.

use crate::fetch::{PageContent, PageFetcher};
use crate::url::PageUrls;
use scraper::Html;
use std::iter::FusedIterator;
use std::num::NonZeroU32;

/// One successfully fetched archive page
#[derive(Debug)]
pub struct Page {
    /// The page URL
    pub url: String,

    /// Parsed page content
    pub document: Html,
}

/// Iterator over the available archive pages of a blog
pub struct Pages<'f, F: PageFetcher + ?Sized> {
    urls: PageUrls,
    fetcher: &'f mut F,
    exhausted: bool,
}

impl<'f, F: PageFetcher + ?Sized> Pages<'f, F> {
    /// Creates a traversal over `urls`
    pub fn new(urls: PageUrls, fetcher: &'f mut F) -> Self {
        Self {
            urls,
            fetcher,
            exhausted: false,
        }
    }
}

impl<F: PageFetcher + ?Sized> Iterator for Pages<'_, F> {
    type Item = Page;

    fn next(&mut self) -> Option<Page> {
        if self.exhausted {
            return None;
        }

        let Some(url) = self.urls.next() else {
            self.exhausted = true;
            return None;
        };

        match self.fetcher.fetch(&url) {
            PageContent::Present(document) => {
                tracing::debug!("Fetched page {}", url);
                Some(Page { url, document })
            }
            PageContent::Absent => {
                tracing::debug!("No content at {}, stopping pagination", url);
                self.exhausted = true;
                None
            }
        }
    }
}

impl<F: PageFetcher + ?Sized> FusedIterator for Pages<'_, F> {}

/// Lazily walks `<base_url>/page/1..=max_pages`, stopping at the first absent page
///
/// # Panics
///
/// Panics if `base_url` is not an absolute URL.
pub fn traverse_pages<'f, F: PageFetcher + ?Sized>(
    base_url: &str,
    fetcher: &'f mut F,
    max_pages: NonZeroU32,
) -> Pages<'f, F> {
    Pages::new(PageUrls::new(base_url, max_pages), fetcher)
}
