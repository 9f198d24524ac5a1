//! Caller-side memoization of crawl results
//!
//! Repeated crawls of the same start URL within the TTL return the stored
//! result instead of hitting the network again. Entries are shared through
//! `Arc` and never modified after insertion.

use crate::config::CrawlRequest;
use crate::crawlers::{HttpFetcher, PageFetcher, crawl_with};
use crate::error::CrawlError;
use crate::results::CrawlResult;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

struct CachedCrawl {
    result: Arc<CrawlResult>,
    stored_at: Instant,
}

/// TTL cache of crawl results keyed by start URL
pub struct CrawlCache {
    entries: RwLock<HashMap<String, CachedCrawl>>,
    ttl: Duration,
    max_entries: usize,
}

impl CrawlCache {
    /// Create a cache holding at most `max_entries` results for `ttl` each
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            max_entries,
        }
    }

    fn key(start_url: &str) -> String {
        start_url.trim().to_string()
    }

    /// Get the cached result for a start URL if it has not expired
    pub fn get(&self, start_url: &str) -> Option<Arc<CrawlResult>> {
        let entries = self.entries.read().ok()?;
        let entry = entries.get(&Self::key(start_url))?;

        if entry.stored_at.elapsed() > self.ttl {
            return None;
        }

        Some(Arc::clone(&entry.result))
    }

    /// Store a result under its start URL
    pub fn insert(&self, result: CrawlResult) -> Arc<CrawlResult> {
        let result = Arc::new(result);
        if self.max_entries == 0 {
            return result;
        }
        let Ok(mut entries) = self.entries.write() else {
            return result;
        };

        entries.retain(|_, entry| entry.stored_at.elapsed() <= self.ttl);
        if entries.len() >= self.max_entries {
            Self::evict_oldest(&mut entries);
        }

        entries.insert(
            Self::key(&result.start_url),
            CachedCrawl {
                result: Arc::clone(&result),
                stored_at: Instant::now(),
            },
        );
        result
    }

    /// Return the cached result or crawl over HTTP and cache the outcome
    pub async fn get_or_crawl(
        &self,
        request: &CrawlRequest,
    ) -> Result<Arc<CrawlResult>, CrawlError> {
        if let Some(cached) = self.get(&request.start_url) {
            ::log::debug!("Crawl cache hit for: {}", request.start_url);
            return Ok(cached);
        }

        let start_url = request.validate()?;
        ::log::trace!("Crawl cache miss for: {}", start_url);
        let fetcher = HttpFetcher::new(request.timeout())?;
        self.get_or_crawl_with(&fetcher, request).await
    }

    /// Return the cached result or crawl through `fetcher` and cache the outcome
    pub async fn get_or_crawl_with<F: PageFetcher>(
        &self,
        fetcher: &F,
        request: &CrawlRequest,
    ) -> Result<Arc<CrawlResult>, CrawlError> {
        if let Some(cached) = self.get(&request.start_url) {
            ::log::debug!("Crawl cache hit for: {}", request.start_url);
            return Ok(cached);
        }

        let result = crawl_with(fetcher, request).await?;
        Ok(self.insert(result))
    }

    /// Drop every cached result
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn evict_oldest(entries: &mut HashMap<String, CachedCrawl>) {
        let oldest = entries
            .iter()
            .min_by_key(|(_, entry)| entry.stored_at)
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            entries.remove(&key);
        }
    }
}
