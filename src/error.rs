use thiserror::Error;

/// Failure to retrieve a single page
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request did not complete within the configured timeout
    #[error("timed out fetching {0}")]
    Timeout(String),

    /// Connection, TLS, or body decoding failure
    #[error("HTTP error fetching {url}: {message}")]
    Http { url: String, message: String },

    /// The server answered with a non-2xx status
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The HTTP client itself could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl FetchError {
    pub(crate) fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(url.to_string())
        } else {
            FetchError::Http {
                url: url.to_string(),
                message: err.to_string(),
            }
        }
    }
}

/// A crawl request rejected before any network activity
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("max_pages must be at least 1")]
    ZeroMaxPages,

    #[error("timeout_seconds must be greater than 0")]
    ZeroTimeout,

    #[error("invalid start URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("start URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),
}

/// Error returned by a crawl
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The start page could not be fetched
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
