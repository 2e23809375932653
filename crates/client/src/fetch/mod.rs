//! HTTP page fetching for the film database site.
//!
//! One GET per page, no retries and no caching: the scraper fetches a
//! document, parses it, and forgets it. Timeout, redirect and body-size
//! limits come from the configuration.
//!
//! Providers consume pages through the [`PageFetcher`] trait rather than
//! the concrete client, so tests can substitute canned documents and
//! injected faults.

pub mod url;

use bytes::Bytes;
use reqwest::Url;
use reqwest::{Client, StatusCode, header};
use std::time::{Duration, Instant};

pub use self::url::canonicalize;

use csfd_core::{AppConfig, ScrapeError};

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User agent string (default: "csfd-scraper/0.1")
    pub user_agent: String,

    /// Maximum response body size in bytes (default: 5MB)
    pub max_bytes: usize,

    /// Request timeout (default: 20s)
    pub timeout: Duration,

    /// Maximum number of redirects to follow (default: 5)
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "csfd-scraper/0.1".to_string(),
            max_bytes: 5 * 1024 * 1024,
            timeout: Duration::from_millis(20000),
            max_redirects: 5,
        }
    }
}

impl From<&AppConfig> for FetchConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            max_bytes: config.max_bytes,
            timeout: config.timeout(),
            max_redirects: config.max_redirects,
        }
    }
}

/// Response from a fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// The original URL requested
    pub url: Url,
    /// The final URL after redirects
    pub final_url: Url,
    /// HTTP status code
    pub status: StatusCode,
    /// Content-Type header
    pub content_type: Option<String>,
    /// Response body bytes
    pub bytes: Bytes,
    /// Time taken to fetch in milliseconds
    pub fetch_ms: u64,
}

impl FetchResponse {
    /// Decode the body as UTF-8 text.
    ///
    /// The site serves UTF-8; stray invalid sequences are replaced rather
    /// than failing the whole document.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// A capability that retrieves a URL's body as decoded text.
///
/// This is the seam between the providers and the network: production code
/// uses [`FetchClient`], tests use canned documents and injected faults.
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch a URL and decode its body as UTF-8 text.
    async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError>;
}

/// HTTP fetch client.
pub struct FetchClient {
    http: Client,
    config: FetchConfig,
}

impl FetchClient {
    /// Create a new fetch client with the given configuration.
    pub fn new(config: FetchConfig) -> Result<Self, ScrapeError> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| ScrapeError::Fetch(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Fetch a URL, returning raw bytes and metadata.
    ///
    /// Respects the configured redirect and byte limits.
    pub async fn fetch(&self, url_str: &str) -> Result<FetchResponse, ScrapeError> {
        let start = Instant::now();
        let url = canonicalize(url_str).map_err(|e| ScrapeError::InvalidUrl(e.to_string()))?;

        let request = self.http.get(url.as_str()).header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        );

        let response = request
            .send()
            .await
            .map_err(|e| ScrapeError::Fetch(format!("network error: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            return Err(ScrapeError::Http(status.as_u16()));
        }

        let content_length = response.content_length();
        if let Some(len) = content_length
            && len as usize > self.config.max_bytes
        {
            return Err(ScrapeError::TooLarge(format!("{} bytes exceeds {}", len, self.config.max_bytes)));
        }

        let final_url = response.url().clone();

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ScrapeError::Fetch(format!("failed to read response: {}", e)))?;

        if bytes.len() > self.config.max_bytes {
            return Err(ScrapeError::TooLarge(format!(
                "{} bytes exceeds {}",
                bytes.len(),
                self.config.max_bytes
            )));
        }

        let fetch_ms = start.elapsed().as_millis() as u64;

        tracing::debug!(
            "fetched {} -> {} in {}ms ({} bytes)",
            url,
            final_url,
            fetch_ms,
            bytes.len()
        );

        Ok(FetchResponse { url, final_url, status, content_type, bytes, fetch_ms })
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}

#[async_trait::async_trait]
impl PageFetcher for FetchClient {
    async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self.fetch(url).await?;
        Ok(response.text())
    }
}
