pub mod fetcher;
pub mod web;

pub use fetcher::{BROWSER_USER_AGENT, HttpFetcher, PageFetcher};
pub use web::{crawl, crawl_with};
