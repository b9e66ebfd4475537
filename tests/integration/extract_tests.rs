//! Integration tests for blog extraction over HTTP
//!
//! These tests use wiremock to serve a small WordPress-style blog and run
//! the blocking HTTP fetcher through the full extraction pipeline.

use press_harvest::config::{HttpConfig, UserAgentConfig};
use press_harvest::extract::{build_blog_with, ExtractOptions, ImageMode, PostStrategy};
use press_harvest::{null_date, Blog, HttpFetcher, PageFetcher};
use std::num::NonZeroU32;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FRONT_PAGE: &str = r#"<html><head><title>Some Blog</title></head><body>
    <header><h1 class="site-title">Some Blog</h1></header>
    </body></html>"#;

fn archive_page(posts: &[(&str, &str, &str)]) -> String {
    let articles: String = posts
        .iter()
        .map(|(id, title, date)| {
            format!(
                r#"<article id="{id}">
                <header>
                    <h2 class="entry-title"><a href="/{id}">{title}</a></h2>
                    <time class="entry-date published" datetime="{date}">{date}</time>
                    <div class="post-thumbnail"><img src="http://someblog.net/{id}.jpg"></div>
                </header>
                <div class="entry-content"><p>Body of {title}.</p></div>
                </article>"#
            )
        })
        .collect();

    format!("<html><body><main>{}</main></body></html>", articles)
}

fn html_response(body: impl Into<String>) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body.into())
        .insert_header("content-type", "text/html")
}

async fn mount_page(server: &MockServer, page_path: &str, body: impl Into<String>) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(html_response(body))
        .mount(server)
        .await;
}

/// Runs extraction on a blocking thread, where reqwest's blocking client lives
async fn extract(base_url: String, options: ExtractOptions) -> Blog {
    tokio::task::spawn_blocking(move || {
        let mut fetcher =
            HttpFetcher::from_config(&UserAgentConfig::default(), &HttpConfig::default())
                .expect("Failed to build HTTP client");
        build_blog_with(&base_url, &mut fetcher, &options).expect("Extraction failed")
    })
    .await
    .expect("Extraction task panicked")
}

fn options(max_pages: u32) -> ExtractOptions {
    ExtractOptions {
        max_pages: NonZeroU32::new(max_pages).unwrap(),
        ..ExtractOptions::default()
    }
}

#[tokio::test]
async fn test_full_extraction_stops_at_missing_page() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, "/", FRONT_PAGE).await;
    mount_page(
        &mock_server,
        "/page/1",
        archive_page(&[
            ("post-3", "Third", "2015-01-03T10:00:00+00:00"),
            ("post-2", "Second", "2015-01-02T10:00:00+00:00"),
        ]),
    )
    .await;
    mount_page(
        &mock_server,
        "/page/2",
        archive_page(&[("post-1", "First", "2015-01-01T10:00:00+00:00")]),
    )
    .await;

    // Anything past /page/2 is a 404 and ends the walk
    Mock::given(method("GET"))
        .and(path("/page/4"))
        .respond_with(html_response(archive_page(&[("post-0", "Zero", "")])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let blog = extract(mock_server.uri(), options(10)).await;

    assert_eq!(blog.title, "Some Blog");
    assert_eq!(blog.url, mock_server.uri());

    let ids: Vec<&str> = blog.posts.iter().map(|post| post.id.as_str()).collect();
    assert_eq!(ids, vec!["post-3", "post-2", "post-1"]);

    let first = &blog.posts[0];
    assert_eq!(first.title, "Third");
    assert_eq!(first.images, vec!["http://someblog.net/post-3.jpg"]);
    assert_eq!(first.date.to_rfc3339(), "2015-01-03T10:00:00+00:00");
    assert_eq!(first.content, "<p>Body of Third.</p>");
}

#[tokio::test]
async fn test_page_budget_limits_requests() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, "/", FRONT_PAGE).await;
    mount_page(
        &mock_server,
        "/page/1",
        archive_page(&[("post-2", "Second", "2015-01-02T10:00:00+00:00")]),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/page/2"))
        .respond_with(html_response(archive_page(&[("post-1", "First", "")])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let blog = extract(mock_server.uri(), options(1)).await;

    assert_eq!(blog.posts.len(), 1);
    assert_eq!(blog.posts[0].id, "post-2");
}

#[tokio::test]
async fn test_server_error_treated_as_absent_page() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, "/", FRONT_PAGE).await;
    mount_page(
        &mock_server,
        "/page/1",
        archive_page(&[("post-2", "Second", "2015-01-02T10:00:00+00:00")]),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/page/2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/page/3"))
        .respond_with(html_response(archive_page(&[("post-1", "First", "")])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let blog = extract(mock_server.uri(), options(5)).await;

    assert_eq!(blog.posts.len(), 1);
}

#[tokio::test]
async fn test_blog_without_archive_has_no_posts() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"<html><body><h1 id="blog-title">  Untidy Title  </h1></body></html>"#,
    )
    .await;

    let blog = extract(mock_server.uri(), options(3)).await;

    assert_eq!(blog.title, "Untidy Title");
    assert!(blog.posts.is_empty());
}

#[tokio::test]
async fn test_tag_strategy_with_thumbnails() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, "/", FRONT_PAGE).await;
    mount_page(
        &mock_server,
        "/page/1",
        r#"<html><body>
        <aside><article id="post-99"><div class="entry-content">sidebar</div></article></aside>
        <main>
            <article id="post-7">
                <header>
                    <h2 class="entry-title"><a href="/post-7">Seven</a></h2>
                    <div class="post-thumbnail"><img src="http://someblog.net/thumb.jpg"></div>
                </header>
                <div class="entry-content"><img src="http://someblog.net/inline.jpg"></div>
            </article>
        </main>
        </body></html>"#,
    )
    .await;

    let options = ExtractOptions {
        max_pages: NonZeroU32::new(2).unwrap(),
        post_strategy: PostStrategy::Tag,
        image_mode: ImageMode::Thumbnail,
    };
    let blog = extract(mock_server.uri(), options).await;

    assert_eq!(blog.posts.len(), 1);
    let post = &blog.posts[0];
    assert_eq!(post.id, "post-7");
    assert_eq!(post.images, vec!["http://someblog.net/thumb.jpg"]);
    assert_eq!(post.date, null_date());
}

#[tokio::test]
async fn test_fetcher_sends_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header_exists("user-agent"))
        .respond_with(html_response(FRONT_PAGE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = mock_server.uri();
    let absent = tokio::task::spawn_blocking(move || {
        let mut fetcher =
            HttpFetcher::from_config(&UserAgentConfig::default(), &HttpConfig::default())
                .expect("Failed to build HTTP client");
        fetcher.fetch(&url).is_absent()
    })
    .await
    .expect("Fetch task panicked");

    assert!(!absent);
}
