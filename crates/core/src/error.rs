//! Unified fatal error types for the csfd scraper.
//!
//! Only failures that make an entire scrape unusable live here. Per-field
//! extraction problems are recovered close to the extractors and never
//! cross the provider boundary as errors.

/// Fatal errors surfaced to the host application.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// No usable detail-page URL could be derived from the request.
    #[error("RESOLUTION_ERROR: {0}")]
    Resolution(String),

    /// Invalid or malformed URL.
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// Network/transport failure while fetching a page.
    #[error("FETCH_ERROR: {0}")]
    Fetch(String),

    /// Non-success HTTP status from the site.
    #[error("HTTP_ERROR: status {0}")]
    Http(u16),

    /// Response body exceeded the configured size limit.
    #[error("FETCH_TOO_LARGE: {0}")]
    TooLarge(String),

    /// The fetched document could not be parsed at all.
    #[error("PARSE_ERROR: {0}")]
    Parse(String),
}
