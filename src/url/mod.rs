//! URL handling module for Press-Harvest
//!
//! This module provides absolute-URL validation and the archive page URL
//! sequence (`<base>/page/1`, `<base>/page/2`, ...).

mod pages;

pub use pages::{sequence_page_urls, PageUrls};

use url::Url;

/// Returns true if `candidate` is an absolute (internationalized) URL
///
/// A valid URL carries a scheme, contains no whitespace or control
/// characters and has no fragment. Query strings are allowed. Relative
/// references such as `/page/2` or `someblog.net` are rejected.
///
/// # Examples
///
/// ```
/// use press_harvest::url::is_valid_url;
///
/// assert!(is_valid_url("http://someblog.net"));
/// assert!(is_valid_url("https://someblog.net/?lang=pt"));
/// assert!(!is_valid_url("not-a-url"));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    if candidate.is_empty()
        || candidate
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
    {
        return false;
    }

    match Url::parse(candidate) {
        Ok(url) => url.fragment().is_none(),
        Err(_) => false,
    }
}
