use crate::error::FetchError;
use crate::results::FetchedPage;
use reqwest::Client;
use std::time::Duration;

/// Desktop browser identity sent with every page request
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36";

/// Source of page HTML for the crawler
pub trait PageFetcher {
    /// Fetch a single page, failing on network error, timeout, or non-2xx status
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FetchedPage, FetchError>> + Send;
}

/// Fetches pages over HTTP with one GET per call and no retries
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        ::log::debug!("FETCH: {}", url);
        let started = std::time::Instant::now();

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        // Servers that declare no charset get UTF-8
        let html = response
            .text_with_charset("utf-8")
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        ::log::debug!(
            "Fetched {} bytes from {} in {:.2} seconds",
            html.len(),
            url,
            started.elapsed().as_secs_f64()
        );

        Ok(FetchedPage::new(url.to_string(), html))
    }
}
