use crate::error::ValidationError;
use crate::filter::is_http;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Parameters of a single crawl
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlRequest {
    /// URL of the home page to start from
    pub start_url: String,

    /// Maximum number of pages visited, home page included
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// Maximum number of candidate links taken from the home page
    #[serde(default = "default_max_internal_links")]
    pub max_internal_links_from_home: usize,

    /// Maximum number of image URLs across all pages
    #[serde(default = "default_max_images")]
    pub max_images_total: usize,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

/// Default value for max_pages
fn default_max_pages() -> usize {
    3
}

/// Default value for max_internal_links_from_home
fn default_max_internal_links() -> usize {
    8
}

/// Default value for max_images_total
fn default_max_images() -> usize {
    12
}

/// Default value for timeout_seconds
fn default_timeout_seconds() -> u64 {
    15
}

impl CrawlRequest {
    /// Create a new request with default limits
    pub fn new(start_url: &str) -> Self {
        Self {
            start_url: start_url.trim().to_string(),
            max_pages: default_max_pages(),
            max_internal_links_from_home: default_max_internal_links(),
            max_images_total: default_max_images(),
            timeout_seconds: default_timeout_seconds(),
        }
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn with_max_internal_links(mut self, max_links: usize) -> Self {
        self.max_internal_links_from_home = max_links;
        self
    }

    pub fn with_max_images(mut self, max_images: usize) -> Self {
        self.max_images_total = max_images;
        self
    }

    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Load a request from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load a request from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let request: Self = serde_json::from_str(json)?;
        Ok(request)
    }

    /// Per-request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Check the request and return the parsed start URL
    pub fn validate(&self) -> Result<Url, ValidationError> {
        if self.max_pages < 1 {
            return Err(ValidationError::ZeroMaxPages);
        }
        if self.timeout_seconds == 0 {
            return Err(ValidationError::ZeroTimeout);
        }

        let url = Url::parse(&self.start_url).map_err(|e| ValidationError::InvalidUrl {
            url: self.start_url.clone(),
            reason: e.to_string(),
        })?;
        if !is_http(&url) {
            return Err(ValidationError::UnsupportedScheme(url.scheme().to_string()));
        }

        Ok(url)
    }
}

/// Which webhook path of the workflow engine to call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WorkflowMode {
    /// The engine's test listener, only active while the workflow editor is open
    #[default]
    Test,
    /// The activated production webhook
    Live,
}

/// Connection settings for the downstream ad-generation workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Base URL of the workflow engine
    pub base_url: String,

    /// Webhook path name configured in the workflow
    #[serde(default = "default_webhook_name")]
    pub webhook_name: String,

    #[serde(default)]
    pub mode: WorkflowMode,

    /// Full endpoint URL; takes precedence over base_url, webhook_name and mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Shared secret sent with every submission
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,

    /// Header carrying the shared secret
    #[serde(default = "default_secret_header")]
    pub secret_header: String,

    /// Request timeout in seconds
    #[serde(default = "default_workflow_timeout")]
    pub timeout_seconds: u64,
}

fn default_webhook_name() -> String {
    "generate-ads".to_string()
}

fn default_secret_header() -> String {
    "X-Webhook-Secret".to_string()
}

fn default_workflow_timeout() -> u64 {
    30
}

impl WorkflowConfig {
    /// Create a configuration with default webhook settings
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            webhook_name: default_webhook_name(),
            mode: WorkflowMode::default(),
            endpoint: None,
            secret: None,
            secret_header: default_secret_header(),
            timeout_seconds: default_workflow_timeout(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// The URL submissions are posted to
    pub fn endpoint_url(&self) -> String {
        if let Some(endpoint) = &self.endpoint {
            return endpoint.clone();
        }

        let prefix = match self.mode {
            WorkflowMode::Test => "webhook-test",
            WorkflowMode::Live => "webhook",
        };
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            prefix,
            self.webhook_name
        )
    }
}
