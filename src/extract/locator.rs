//! Post discovery within a page
//!
//! Two markup conventions are supported, selected by [`PostStrategy`]:
//! - `Identifier`: elements whose `id` starts with `post-`
//! - `Tag`: `<article>` elements inside the first `<main>`
//!
//! Fragments are yielded lazily, in document order.

use crate::extract::{compile_selector, PostStrategy};
use crate::fetch::PageContent;
use crate::HarvestError;
use scraper::{element_ref, html, ElementRef, Html, Selector};

const POST_ID_SELECTOR: &str = r#"[id^="post-"]"#;
const MAIN_REGION_SELECTOR: &str = "main";
const ARTICLE_SELECTOR: &str = "article";

/// Finds post fragments on a page
#[derive(Debug, Clone)]
pub struct PostLocator {
    strategy: PostStrategy,
    posts: Selector,
    region: Option<Selector>,
}

impl PostLocator {
    /// Creates a locator for the given strategy
    pub fn new(strategy: PostStrategy) -> Result<Self, HarvestError> {
        let (posts, region) = match strategy {
            PostStrategy::Identifier => (compile_selector(POST_ID_SELECTOR)?, None),
            PostStrategy::Tag => (
                compile_selector(ARTICLE_SELECTOR)?,
                Some(compile_selector(MAIN_REGION_SELECTOR)?),
            ),
        };

        Ok(Self {
            strategy,
            posts,
            region,
        })
    }

    /// The strategy this locator applies
    pub fn strategy(&self) -> PostStrategy {
        self.strategy
    }

    /// Lazily yields every post fragment of `document`
    pub fn find_posts<'a>(&'a self, document: &'a Html) -> PostFragments<'a> {
        match &self.region {
            None => PostFragments::Document(document.select(&self.posts)),
            Some(region) => match document.select(region).next() {
                Some(main) => PostFragments::Region(main.select(&self.posts)),
                None => PostFragments::Empty,
            },
        }
    }

    /// Like [`find_posts`](Self::find_posts), with absent content yielding nothing
    pub fn find_in<'a>(&'a self, content: &'a PageContent) -> PostFragments<'a> {
        match content.document() {
            Some(document) => self.find_posts(document),
            None => PostFragments::Empty,
        }
    }
}

/// Lazy sequence of post fragments
pub enum PostFragments<'a> {
    /// Matches anywhere in the document
    Document(html::Select<'a, 'a>),

    /// Matches inside a content region
    Region(element_ref::Select<'a, 'a>),

    /// No content region or no content at all
    Empty,
}

impl<'a> Iterator for PostFragments<'a> {
    type Item = ElementRef<'a>;

    fn next(&mut self) -> Option<ElementRef<'a>> {
        match self {
            Self::Document(select) => select.next(),
            Self::Region(select) => select.next(),
            Self::Empty => None,
        }
    }
}
