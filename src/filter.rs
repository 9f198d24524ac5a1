use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

/// Paths with these extensions are resources, not crawlable pages
pub const NON_PAGE_PATTERN: &str = r"(?i)\.(pdf|jpg|jpeg|png|gif|webp|svg|zip|mp4|mov|avi)$";

/// Configuration for URL filtering in crawlers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlFilterConfig {
    /// Network location (host[:port]) a URL must match, compared case-insensitively
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_netloc: Option<String>,

    /// Regex patterns matched against the URL path; a match rejects the URL
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,
}

fn default_exclude_patterns() -> Vec<String> {
    vec![NON_PAGE_PATTERN.to_string()]
}

impl Default for UrlFilterConfig {
    fn default() -> Self {
        Self {
            required_netloc: None,
            exclude_patterns: default_exclude_patterns(),
        }
    }
}

/// URL filter that decides which discovered links are candidate pages
#[derive(Debug)]
pub struct UrlFilter {
    config: UrlFilterConfig,
    exclude_regexes: Vec<Regex>,
}

impl Default for UrlFilter {
    fn default() -> Self {
        Self::new(UrlFilterConfig::default()).expect("Default regex patterns should be valid")
    }
}

impl UrlFilter {
    /// Create a new URL filter from configuration
    pub fn new(config: UrlFilterConfig) -> Result<Self, regex::Error> {
        let mut exclude_regexes = Vec::with_capacity(config.exclude_patterns.len());
        for pattern in &config.exclude_patterns {
            exclude_regexes.push(Regex::new(pattern)?);
        }

        Ok(Self {
            config,
            exclude_regexes,
        })
    }

    /// Filter restricted to the network location of `base`, with the default exclusions
    pub fn same_site(base: &Url) -> Self {
        let config = UrlFilterConfig {
            required_netloc: Some(netloc(base)),
            ..UrlFilterConfig::default()
        };
        Self::new(config).expect("Default regex patterns should be valid")
    }

    /// Determine if a resolved URL is a candidate page
    pub fn should_crawl(&self, url: &Url) -> bool {
        if !is_http(url) {
            return false;
        }

        if !self.is_in_domain_scope(url) {
            return false;
        }

        let path = url.path();
        !self.exclude_regexes.iter().any(|regex| regex.is_match(path))
    }

    fn is_in_domain_scope(&self, url: &Url) -> bool {
        match &self.config.required_netloc {
            Some(required) => netloc(url).eq_ignore_ascii_case(required),
            None => true,
        }
    }

    /// Create a normalized version of the URL (removing the fragment)
    pub fn normalize_url(&self, url: &Url) -> Url {
        let mut normalized = url.clone();
        normalized.set_fragment(None);
        normalized
    }
}

/// Whether the URL uses the http or https scheme
pub fn is_http(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

/// The network location of a URL: lowercased host plus an explicit port
pub fn netloc(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host,
    }
}

/// Whether two URLs share a network location
pub fn same_domain(a: &Url, b: &Url) -> bool {
    netloc(a) == netloc(b)
}
