use serde::{Deserialize, Serialize};

/// Prefix of the header line that opens each page's text block
pub const PAGE_MARKER: &str = "[PAGE]";

/// Raw HTML of a fetched page, dropped once its content is extracted
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL the page was requested from
    pub url: String,

    /// Decoded response body
    pub html: String,
}

impl FetchedPage {
    pub fn new(url: String, html: String) -> Self {
        Self { url, html }
    }
}

/// Aggregate output of a crawl
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlResult {
    /// URL the crawl started from
    pub start_url: String,

    /// Pages successfully fetched, in visit order
    pub visited_urls: Vec<String>,

    /// Text blocks of every page, each headed by its URL
    pub text: String,

    /// Image URLs in discovery order
    pub image_urls: Vec<String>,
}

impl CrawlResult {
    /// Assemble the result from per-page text blocks
    pub fn new(
        start_url: String,
        visited_urls: Vec<String>,
        text_blocks: &[String],
        image_urls: Vec<String>,
    ) -> Self {
        Self {
            start_url,
            visited_urls,
            text: text_blocks.join("\n\n").trim().to_string(),
            image_urls,
        }
    }
}

/// Format one page's text under its URL header
pub fn page_block(url: &str, text: &str) -> String {
    format!("{} {}\n{}", PAGE_MARKER, url, text)
}
