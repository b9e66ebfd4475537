use crate::url::is_valid_url;
use std::iter::FusedIterator;
use std::num::NonZeroU32;

/// Ordered sequence of archive page URLs for a blog
///
/// Yields `<base>/page/1` through `<base>/page/<max_pages>`, inserting exactly
/// one `/` between the base URL and `page/`. A fresh `PageUrls` always starts
/// again from page 1.
#[derive(Debug, Clone)]
pub struct PageUrls {
    base: String,
    next_page: u64,
    max_pages: u64,
}

impl PageUrls {
    /// Creates the page sequence for `base_url`
    ///
    /// # Panics
    ///
    /// Panics if `base_url` is not an absolute URL. Callers validate user
    /// input with [`is_valid_url`] before reaching this point.
    pub fn new(base_url: &str, max_pages: NonZeroU32) -> Self {
        assert!(
            is_valid_url(base_url),
            "page sequencing requires an absolute URL, got {:?}",
            base_url
        );

        let base = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        Self {
            base,
            next_page: 1,
            max_pages: u64::from(max_pages.get()),
        }
    }

    /// Returns the URL of a given page number
    pub fn page_url(&self, page: u64) -> String {
        format!("{}page/{}", self.base, page)
    }

    /// Number of pages in the full sequence
    pub fn max_pages(&self) -> u64 {
        self.max_pages
    }
}

impl Iterator for PageUrls {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.next_page > self.max_pages {
            return None;
        }

        let url = self.page_url(self.next_page);
        self.next_page += 1;
        Some(url)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.max_pages + 1).saturating_sub(self.next_page) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PageUrls {}

impl FusedIterator for PageUrls {}

/// Produces the archive page URLs for `base_url`, pages `1..=max_pages`
///
/// # Example
///
/// ```
/// use press_harvest::url::sequence_page_urls;
/// use std::num::NonZeroU32;
///
/// let urls: Vec<String> =
///     sequence_page_urls("http://someblog.net/", NonZeroU32::new(2).unwrap()).collect();
/// assert_eq!(urls, ["http://someblog.net/page/1", "http://someblog.net/page/2"]);
/// ```
pub fn sequence_page_urls(base_url: &str, max_pages: NonZeroU32) -> PageUrls {
    PageUrls::new(base_url, max_pages)
}
