use crate::config::CrawlRequest;
use crate::crawlers::fetcher::{HttpFetcher, PageFetcher};
use crate::error::CrawlError;
use crate::filter::same_domain;
use crate::parsers::{ParseLimits, ParseResult, Parser};
use crate::results::{CrawlResult, page_block};
use std::collections::HashSet;
use url::Url;

/// Crawls a site over HTTP and returns its aggregated text and images.
///
/// Fails only when the request is invalid or the start page cannot be
/// fetched. Pages are fetched one after another, never concurrently.
pub async fn crawl(request: &CrawlRequest) -> Result<CrawlResult, CrawlError> {
    let start_url = request.validate()?;
    let fetcher = HttpFetcher::new(request.timeout())?;
    traverse(&fetcher, request, &start_url).await
}

/// Same as [`crawl`], fetching pages through the given fetcher
pub async fn crawl_with<F: PageFetcher>(
    fetcher: &F,
    request: &CrawlRequest,
) -> Result<CrawlResult, CrawlError> {
    let start_url = request.validate()?;
    traverse(fetcher, request, &start_url).await
}

/// Visits the home page, then up to `max_pages - 1` of the links found on it
async fn traverse<F: PageFetcher>(
    fetcher: &F,
    request: &CrawlRequest,
    start_url: &Url,
) -> Result<CrawlResult, CrawlError> {
    ::log::info!("Starting crawl for: {}", request.start_url);
    let mut harvest = Harvest::new(request.max_images_total);

    // The home page is the only fetch whose failure aborts the crawl
    let home = fetcher.fetch(&request.start_url).await?;
    let limits = ParseLimits {
        max_images: request.max_images_total,
        max_links: (request.max_pages > 1).then_some(request.max_internal_links_from_home),
    };
    let mut parsed = Parser::parse(&home.html, start_url, &limits);
    drop(home);

    let candidates = std::mem::take(&mut parsed.links);
    harvest.record(&request.start_url, &normalized_key(start_url), parsed);
    ::log::info!("Found {} candidate links on home page", candidates.len());

    for link in candidates {
        if harvest.visited.len() >= request.max_pages {
            break;
        }
        if !same_domain(start_url, &link) {
            ::log::debug!("Skipping off-site link: {}", link);
            continue;
        }
        let key = normalized_key(&link);
        if harvest.has_visited(&key) {
            ::log::debug!("Skipping already visited link: {}", link);
            continue;
        }

        let page = match fetcher.fetch(link.as_str()).await {
            Ok(page) => page,
            Err(e) => {
                ::log::warn!("Skipping {}: {}", link, e);
                continue;
            }
        };

        let limits = ParseLimits {
            max_images: harvest.image_budget(),
            max_links: None,
        };
        let parsed = Parser::parse(&page.html, &link, &limits);
        harvest.record(link.as_str(), &key, parsed);
    }

    ::log::info!(
        "Crawl of {} complete - {} pages, {} images",
        request.start_url,
        harvest.visited.len(),
        harvest.images.len()
    );
    Ok(harvest.finish(&request.start_url))
}

fn normalized_key(url: &Url) -> String {
    let mut normalized = url.clone();
    normalized.set_fragment(None);
    normalized.into()
}

/// Accumulates per-page output while enforcing the global caps
struct Harvest {
    visited: Vec<String>,
    visited_keys: HashSet<String>,
    text_blocks: Vec<String>,
    images: Vec<String>,
    seen_images: HashSet<String>,
    max_images: usize,
}

impl Harvest {
    fn new(max_images: usize) -> Self {
        Self {
            visited: Vec::new(),
            visited_keys: HashSet::new(),
            text_blocks: Vec::new(),
            images: Vec::new(),
            seen_images: HashSet::new(),
            max_images,
        }
    }

    fn has_visited(&self, key: &str) -> bool {
        self.visited_keys.contains(key)
    }

    /// Per-page image cap: the full total while room remains, so duplicates
    /// of earlier pages do not crowd out new images
    fn image_budget(&self) -> usize {
        if self.images.len() < self.max_images {
            self.max_images
        } else {
            0
        }
    }

    fn record(&mut self, url: &str, key: &str, parsed: ParseResult) {
        self.visited.push(url.to_string());
        self.visited_keys.insert(key.to_string());

        if !parsed.content.is_empty() {
            self.text_blocks.push(page_block(url, &parsed.content));
        }

        for image in parsed.images {
            if self.images.len() >= self.max_images {
                break;
            }
            if self.seen_images.insert(image.clone()) {
                self.images.push(image);
            }
        }
    }

    fn finish(self, start_url: &str) -> CrawlResult {
        CrawlResult::new(
            start_url.to_string(),
            self.visited,
            &self.text_blocks,
            self.images,
        )
    }
}
