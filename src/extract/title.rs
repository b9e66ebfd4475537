//! Blog title lookup
//!
//! The title lives in an `<h1>` marked with `site-title` or `blog-title`,
//! either as its `id` or as one of its classes.

use crate::extract::compile_selector;
use crate::HarvestError;
use scraper::{Html, Selector};

const TITLE_ATTRIBUTES: &[&str] = &["id", "class"];
const TITLE_VALUES: &[&str] = &["site-title", "blog-title"];

/// Resolves blog titles from front pages
#[derive(Debug, Clone)]
pub struct TitleResolver {
    candidates: Vec<Selector>,
}

impl TitleResolver {
    /// Compiles the title candidates in priority order
    ///
    /// Attribute-major: `id` with `site-title` then `blog-title`, then
    /// `class` with the same values.
    pub fn new() -> Result<Self, HarvestError> {
        let candidates = TITLE_ATTRIBUTES
            .iter()
            .flat_map(|attribute| {
                TITLE_VALUES
                    .iter()
                    .map(move |value| title_selector(attribute, value))
            })
            .map(|css| compile_selector(&css))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { candidates })
    }

    /// Trimmed text of the first matching heading, or empty
    pub fn resolve(&self, document: &Html) -> String {
        self.candidates
            .iter()
            .find_map(|selector| document.select(selector).next())
            .map(|element| element.text().collect::<String>().trim().to_string())
            .unwrap_or_default()
    }
}

/// Resolves the blog title from its front page
///
/// Tries every combination of attribute (`id`, then `class`) and value
/// (`site-title`, then `blog-title`) against `<h1>` elements. The first
/// match wins; when nothing matches the title is empty.
///
/// Prefer reusing a [`TitleResolver`] when resolving many pages.
///
/// # Example
///
/// ```
/// use press_harvest::extract::resolve_blog_title;
/// use scraper::Html;
///
/// let page = Html::parse_document(r#"<h1 class="site-title"><a href="/">Some Blog</a></h1>"#);
/// assert_eq!(resolve_blog_title(&page), "Some Blog");
/// ```
pub fn resolve_blog_title(document: &Html) -> String {
    match TitleResolver::new() {
        Ok(resolver) => resolver.resolve(document),
        Err(e) => {
            tracing::error!("Failed to build title resolver: {}", e);
            String::new()
        }
    }
}

fn title_selector(attribute: &str, value: &str) -> String {
    match attribute {
        // class matches any whitespace-separated token
        "class" => format!(r#"h1[class~="{}"]"#, value),
        _ => format!(r#"h1[{}="{}"]"#, attribute, value),
    }
}
