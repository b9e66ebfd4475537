//! Per-post field extraction
//!
//! Each field is resolved independently and falls back to its empty value
//! when its markup is missing. Only a fragment without an `id` is unusable
//! as a whole; it degrades to [`Post::empty`].

use crate::extract::date::try_parse_date;
use crate::extract::{compile_selector, ImageMode};
use crate::model::{null_date, Post};
use crate::HarvestError;
use chrono::{DateTime, FixedOffset};
use scraper::{ElementRef, Selector};

/// Containers whose first link holds the post title, by priority
const TITLE_MARKERS: &[&str] = &[".entry-title", "header"];

/// Elements carrying the publish date in one of their attributes, by priority
const DATE_MARKERS: &[&str] = &[".published", ".entry-date", "time[datetime]"];

/// Regions searched for a thumbnail image, by priority
const THUMBNAIL_REGIONS: &[&str] = &[".post-thumbnail", "header"];

#[derive(Debug)]
enum PostError {
    MissingId,
}

/// Extracts [`Post`] records from post fragments
#[derive(Debug, Clone)]
pub struct PostExtractor {
    image_mode: ImageMode,
    title_markers: Vec<Selector>,
    date_markers: Vec<Selector>,
    thumbnail_regions: Vec<Selector>,
    link: Selector,
    image: Selector,
    content: Selector,
}

impl PostExtractor {
    /// Creates an extractor using the given image mode
    pub fn new(image_mode: ImageMode) -> Result<Self, HarvestError> {
        Ok(Self {
            image_mode,
            title_markers: compile_all(TITLE_MARKERS)?,
            date_markers: compile_all(DATE_MARKERS)?,
            thumbnail_regions: compile_all(THUMBNAIL_REGIONS)?,
            link: compile_selector("a")?,
            image: compile_selector("img[src]")?,
            content: compile_selector(".entry-content")?,
        })
    }

    /// Extracts a post, degrading to [`Post::empty`] if the fragment is unusable
    ///
    /// Extraction is deterministic: the same fragment always yields the same
    /// record.
    pub fn extract(&self, fragment: ElementRef<'_>) -> Post {
        match self.try_extract(fragment) {
            Ok(post) => post,
            Err(e) => {
                tracing::debug!(
                    "Skipping <{}> fragment: {:?}",
                    fragment.value().name(),
                    e
                );
                Post::empty()
            }
        }
    }

    fn try_extract(&self, fragment: ElementRef<'_>) -> Result<Post, PostError> {
        let id = fragment
            .value()
            .id()
            .filter(|id| !id.is_empty())
            .ok_or(PostError::MissingId)?;

        Ok(Post {
            id: id.to_string(),
            title: self.title(fragment),
            subtitle: String::new(),
            images: self.images(fragment),
            date: self.date(fragment),
            content: self.content(fragment),
        })
    }

    /// Text of the first link inside a title marker
    ///
    /// Falls back to the bare `.entry-title` text for themes that do not
    /// link the heading.
    fn title(&self, fragment: ElementRef<'_>) -> String {
        for marker in &self.title_markers {
            let link = fragment
                .select(marker)
                .next()
                .and_then(|element| element.select(&self.link).next());

            if let Some(link) = link {
                return element_text(link);
            }
        }

        self.title_markers
            .first()
            .and_then(|marker| fragment.select(marker).next())
            .map(element_text)
            .unwrap_or_default()
    }

    fn images(&self, fragment: ElementRef<'_>) -> Vec<String> {
        match self.image_mode {
            ImageMode::All => fragment
                .select(&self.image)
                .filter_map(image_source)
                .collect(),
            ImageMode::Thumbnail => self
                .thumbnail_regions
                .iter()
                .find_map(|region| {
                    fragment
                        .select(region)
                        .flat_map(|element| element.select(&self.image))
                        .find_map(image_source)
                })
                .into_iter()
                .collect(),
        }
    }

    /// First parseable attribute value of the first present date marker
    ///
    /// Attributes are scanned in source order. Later markers are not
    /// consulted once one is present, even if none of its values parse.
    fn date(&self, fragment: ElementRef<'_>) -> DateTime<FixedOffset> {
        self.date_markers
            .iter()
            .find_map(|marker| fragment.select(marker).next())
            .and_then(|element| {
                element
                    .value()
                    .attrs()
                    .map(|(_, value)| value)
                    .find_map(try_parse_date)
            })
            .unwrap_or_else(null_date)
    }

    fn content(&self, fragment: ElementRef<'_>) -> String {
        fragment
            .select(&self.content)
            .next()
            .map(|element| element.inner_html())
            .unwrap_or_default()
    }
}

/// Extracts one post using a freshly built [`PostExtractor`]
///
/// Prefer reusing a `PostExtractor` when processing many fragments.
pub fn extract_post(fragment: ElementRef<'_>, image_mode: ImageMode) -> Post {
    match PostExtractor::new(image_mode) {
        Ok(extractor) => extractor.extract(fragment),
        Err(e) => {
            tracing::error!("Failed to build post extractor: {}", e);
            Post::empty()
        }
    }
}

fn compile_all(selectors: &[&str]) -> Result<Vec<Selector>, HarvestError> {
    selectors.iter().map(|css| compile_selector(css)).collect()
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn image_source(image: ElementRef<'_>) -> Option<String> {
    image
        .value()
        .attr("src")
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use scraper::Html;

    const SINGLE_POST_HTML: &str = r#"<article id="post-001">
    <header>
        <h1 class="entry-title">
            <a href="some-link">Some Post</a>
        </h1>
        <div class="post-thumbnail">
            <a href="http://www.someblog.net/2014/12/14/some-post/">
                <img src="http://someblog.net/test.jpg">
            </a>
        </div>
    </header>
    <div class="entry-content"><p>Some text.</p></div>
</article>"#;

    fn with_first_post<T>(html: &str, f: impl FnOnce(ElementRef<'_>) -> T) -> T {
        let document = Html::parse_fragment(html);
        let selector = Selector::parse("[id], article").unwrap();
        let fragment = document.select(&selector).next().unwrap();
        f(fragment)
    }

    fn extract(html: &str, mode: ImageMode) -> Post {
        with_first_post(html, |fragment| extract_post(fragment, mode))
    }

    #[test]
    fn test_minimal_post() {
        let html = r#"<article id="post-001"><header><h1 class="entry-title"><a href="x">Some Post</a></h1></header><div class="entry-content"><p>Some text.</p></div></article>"#;
        let post = extract(html, ImageMode::All);

        assert_eq!(
            post,
            Post {
                id: "post-001".to_string(),
                title: "Some Post".to_string(),
                subtitle: String::new(),
                images: vec![],
                date: null_date(),
                content: "<p>Some text.</p>".to_string(),
            }
        );
    }

    #[test]
    fn test_post_with_thumbnail() {
        let post = extract(SINGLE_POST_HTML, ImageMode::All);
        assert_eq!(post.id, "post-001");
        assert_eq!(post.title, "Some Post");
        assert_eq!(post.images, vec!["http://someblog.net/test.jpg"]);
        assert_eq!(post.content, "<p>Some text.</p>");
    }

    #[test]
    fn test_missing_id_is_empty_post() {
        let html = r#"<article><h1 class="entry-title"><a>Title</a></h1></article>"#;
        assert_eq!(extract(html, ImageMode::All), Post::empty());
    }

    #[test]
    fn test_missing_title_keeps_other_fields() {
        let html = r#"<article id="post-7"><div class="entry-content">Body</div></article>"#;
        let post = extract(html, ImageMode::All);
        assert_eq!(post.id, "post-7");
        assert_eq!(post.title, "");
        assert_eq!(post.content, "Body");
    }

    #[test]
    fn test_title_from_header_link() {
        let html = r#"<article id="post-2"><header><h2><a href="/p">Header Title</a></h2></header></article>"#;
        assert_eq!(extract(html, ImageMode::All).title, "Header Title");
    }

    #[test]
    fn test_unlinked_entry_title() {
        let html = r#"<article id="post-2"><h1 class="entry-title"> Plain Title </h1></article>"#;
        assert_eq!(extract(html, ImageMode::All).title, "Plain Title");
    }

    #[test]
    fn test_missing_content_is_empty() {
        let html = r#"<article id="post-3"><h1 class="entry-title"><a>T</a></h1></article>"#;
        assert_eq!(extract(html, ImageMode::All).content, "");
    }

    #[test]
    fn test_content_keeps_markup() {
        let html = r#"<article id="post-4"><div class="entry-content"><p>One <em>two</em></p><p>Three</p></div></article>"#;
        assert_eq!(
            extract(html, ImageMode::All).content,
            "<p>One <em>two</em></p><p>Three</p>"
        );
    }

    #[test]
    fn test_all_images_in_order() {
        let html = r#"<article id="post-5">
            <header><img src="http://a/head.jpg"></header>
            <div class="entry-content"><img src="http://a/1.jpg"><img alt="no source"><img src="http://a/2.jpg"></div>
        </article>"#;
        assert_eq!(
            extract(html, ImageMode::All).images,
            vec!["http://a/head.jpg", "http://a/1.jpg", "http://a/2.jpg"]
        );
    }

    #[test]
    fn test_thumbnail_mode_takes_single_image() {
        let html = r#"<article id="post-5">
            <header><img src="http://a/head.jpg"><div class="post-thumbnail"><img src="http://a/thumb.jpg"></div></header>
            <div class="entry-content"><img src="http://a/1.jpg"></div>
        </article>"#;
        let post = extract(html, ImageMode::Thumbnail);
        assert_eq!(post.images, vec!["http://a/thumb.jpg"]);
        assert_eq!(post.image_url(), Some("http://a/thumb.jpg"));
    }

    #[test]
    fn test_thumbnail_mode_falls_back_to_header() {
        let html = r#"<article id="post-5"><header><img><img src="http://a/head.jpg"></header></article>"#;
        assert_eq!(
            extract(html, ImageMode::Thumbnail).image_url(),
            Some("http://a/head.jpg")
        );
    }

    #[test]
    fn test_thumbnail_mode_without_images() {
        let html = r#"<article id="post-5"><div class="entry-content"><img src="http://a/1.jpg"></div></article>"#;
        assert_eq!(extract(html, ImageMode::Thumbnail).image_url(), None);
    }

    #[test]
    fn test_date_from_marker_attribute() {
        let html = r#"<article id="post-6">
            <time class="entry-date published" datetime="2014-12-15T22:29:25+00:00">December 15, 2014</time>
        </article>"#;
        let post = extract(html, ImageMode::All);
        assert_eq!(post.date, Utc.with_ymd_and_hms(2014, 12, 15, 22, 29, 25).unwrap());
        assert!(post.has_date());
    }

    #[test]
    fn test_date_in_non_canonical_attribute() {
        let html = r#"<article id="post-6">
            <abbr class="published" title="2014-12-15T22:29:25+00:00">Dec 15</abbr>
        </article>"#;
        assert_eq!(
            extract(html, ImageMode::All).date,
            Utc.with_ymd_and_hms(2014, 12, 15, 22, 29, 25).unwrap()
        );
    }

    #[test]
    fn test_no_date_marker_is_null_date() {
        let post = extract(SINGLE_POST_HTML, ImageMode::All);
        assert_eq!(post.date, null_date());
    }

    #[test]
    fn test_unparseable_date_is_null_date() {
        let html = r#"<article id="post-6"><span class="published" data-x="soon">soon</span></article>"#;
        assert_eq!(extract(html, ImageMode::All).date, null_date());
    }

    #[test]
    fn test_first_parseable_attribute_in_source_order_wins() {
        let html = r#"<article id="post-6">
            <time class="published" datetime="2014-12-15T22:29:25+00:00" data-modified="2015-01-01T08:00:00+00:00">Dec 15</time>
        </article>"#;
        for _ in 0..16 {
            assert_eq!(
                extract(html, ImageMode::All).date,
                Utc.with_ymd_and_hms(2014, 12, 15, 22, 29, 25).unwrap()
            );
        }

        let swapped = r#"<article id="post-6">
            <time class="published" data-modified="2015-01-01T08:00:00+00:00" datetime="2014-12-15T22:29:25+00:00">Dec 15</time>
        </article>"#;
        assert_eq!(
            extract(swapped, ImageMode::All).date,
            Utc.with_ymd_and_hms(2015, 1, 1, 8, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_later_marker_ignored_when_first_marker_present() {
        let html = r#"<article id="post-6">
            <span class="published">soon</span>
            <time datetime="2014-12-15T22:29:25+00:00">Dec 15</time>
        </article>"#;
        assert_eq!(extract(html, ImageMode::All).date, null_date());
    }

    #[test]
    fn test_later_marker_used_when_earlier_absent() {
        let html = r#"<article id="post-6">
            <time datetime="2014-12-15T22:29:25+00:00">Dec 15</time>
        </article>"#;
        assert_eq!(
            extract(html, ImageMode::All).date,
            Utc.with_ymd_and_hms(2014, 12, 15, 22, 29, 25).unwrap()
        );
    }

    #[test]
    fn test_extraction_is_idempotent() {
        with_first_post(SINGLE_POST_HTML, |fragment| {
            let extractor = PostExtractor::new(ImageMode::All).unwrap();
            assert_eq!(extractor.extract(fragment), extractor.extract(fragment));
        });
    }
}
