//! HTTP fetcher implementation
//!
//! This module provides the network-backed [`PageFetcher`]:
//! - Building a blocking HTTP client with a descriptive user agent
//! - GET requests for archive pages
//! - Translating every transport failure into `PageContent::Absent`

use crate::config::{HttpConfig, UserAgentConfig};
use crate::fetch::{PageContent, PageFetcher};
use crate::url::is_valid_url;
use reqwest::blocking::Client;
use std::time::Duration;

/// Formats the user agent string sent with every request
///
/// Format: `CrawlerName/Version (+ContactURL; ContactEmail)`
pub fn format_user_agent(config: &UserAgentConfig) -> String {
    format!(
        "{}/{} (+{}; {})",
        config.crawler_name, config.crawler_version, config.contact_url, config.contact_email
    )
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `http` - Timeout configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    http: &HttpConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(format_user_agent(user_agent))
        .timeout(Duration::from_secs(http.timeout_secs))
        .connect_timeout(Duration::from_secs(http.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches archive pages over HTTP
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Wraps an already configured client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a fetcher from configuration
    pub fn from_config(
        user_agent: &UserAgentConfig,
        http: &HttpConfig,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(user_agent, http)?))
    }

    fn fetch_body(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send() {
            Ok(response) => response,
            Err(e) => {
                if e.is_timeout() {
                    tracing::warn!("Request timeout for {}", url);
                } else if e.is_connect() {
                    tracing::warn!("Connection refused for {}", url);
                } else {
                    tracing::warn!("HTTP error for {}: {}", url, e);
                }
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("{} returned HTTP {}", url, status.as_u16());
            return None;
        }

        match response.text() {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::warn!("Failed to read body of {}: {}", url, e);
                None
            }
        }
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&mut self, url: &str) -> PageContent {
        if !is_valid_url(url) {
            tracing::warn!("Refusing to fetch invalid URL {:?}", url);
            return PageContent::Absent;
        }

        match self.fetch_body(url) {
            Some(body) => PageContent::from_html(&body),
            None => PageContent::Absent,
        }
    }
}
