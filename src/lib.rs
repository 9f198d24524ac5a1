//! Bounded same-site crawler that gathers page text and image URLs from a
//! small-business website, for hand-off to an ad-generation workflow.

pub mod cache;
pub mod config;
pub mod crawlers;
pub mod error;
pub mod filter;
pub mod parsers;
pub mod results;
pub mod utils;
pub mod workflow;

// Re-export commonly used types for convenience
pub use config::{CrawlRequest, WorkflowConfig, WorkflowMode};
pub use crawlers::{HttpFetcher, PageFetcher, crawl, crawl_with};
pub use error::{CrawlError, FetchError, ValidationError};
pub use parsers::text::MIN_LINE_CHARS;
pub use results::{CrawlResult, FetchedPage};
