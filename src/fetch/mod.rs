//! Page fetching module
//!
//! The extraction pipeline never talks to the network directly. It asks a
//! [`PageFetcher`] for each page URL and receives a [`PageContent`], which is
//! either a parsed document or an explicit `Absent` marker. `Absent` is what
//! ends pagination.

mod http;

pub use http::{build_http_client, format_user_agent, HttpFetcher};

use scraper::Html;

/// Result of asking a fetcher for one page
#[derive(Debug)]
pub enum PageContent {
    /// The page was retrieved and parsed. Empty or malformed HTML still
    /// lands here.
    Present(Html),

    /// No content could be obtained for the page
    Absent,
}

impl PageContent {
    /// Parses raw HTML into present content
    pub fn from_html(html: &str) -> Self {
        Self::Present(Html::parse_document(html))
    }

    /// Returns the parsed document, if any
    pub fn document(&self) -> Option<&Html> {
        match self {
            Self::Present(document) => Some(document),
            Self::Absent => None,
        }
    }

    /// Returns true if no content was obtained
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Source of page content for the extraction pipeline
///
/// Implementations own transport concerns (timeouts, status handling) and
/// must turn every failure into [`PageContent::Absent`].
pub trait PageFetcher {
    /// Fetches and parses the page at `url`
    fn fetch(&mut self, url: &str) -> PageContent;
}

impl<F> PageFetcher for F
where
    F: FnMut(&str) -> PageContent,
{
    fn fetch(&mut self, url: &str) -> PageContent {
        self(url)
    }
}
