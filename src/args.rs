use clap::{Parser, ValueEnum};
use site_harvest::{CrawlRequest, WorkflowConfig, WorkflowMode};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "site-harvest")]
#[command(about = "Collects page text and image URLs from a small-business website")]
#[command(version)]
pub struct Args {
    /// Website to crawl (must start with http:// or https://)
    pub url: Option<String>,

    /// JSON file with a crawl request; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum pages to visit, home page included [default: 3]
    #[arg(short = 'p', long)]
    pub max_pages: Option<usize>,

    /// Maximum internal links taken from the home page [default: 8]
    #[arg(short = 'l', long)]
    pub max_links: Option<usize>,

    /// Maximum image URLs across all pages [default: 12]
    #[arg(short = 'i', long)]
    pub max_images: Option<usize>,

    /// Per-request timeout in seconds [default: 15]
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Print the result as JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Also write the JSON result into this directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Submit the result to the ad-generation workflow
    #[arg(long)]
    pub submit: bool,

    /// JSON file with workflow settings; workflow flags below override its values
    #[arg(long = "workflow-config", value_name = "FILE")]
    pub workflow_file: Option<PathBuf>,

    /// Base URL of the workflow engine
    #[arg(long, env = "WORKFLOW_URL")]
    pub workflow_url: Option<String>,

    /// Full webhook URL, overriding --workflow-url and --workflow-mode
    #[arg(long, env = "WORKFLOW_ENDPOINT")]
    pub workflow_endpoint: Option<String>,

    /// Which webhook to call [default: test]
    #[arg(long, value_enum)]
    pub workflow_mode: Option<WorkflowModeArg>,

    /// Shared secret sent to the workflow
    #[arg(long, env = "WORKFLOW_SECRET", hide_env_values = true)]
    pub workflow_secret: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum WorkflowModeArg {
    Test,
    Live,
}

impl From<WorkflowModeArg> for WorkflowMode {
    fn from(arg: WorkflowModeArg) -> Self {
        match arg {
            WorkflowModeArg::Test => WorkflowMode::Test,
            WorkflowModeArg::Live => WorkflowMode::Live,
        }
    }
}

impl Args {
    /// Build the crawl request from the config file and flag overrides
    pub fn crawl_request(&self) -> Result<CrawlRequest, Box<dyn Error>> {
        let mut request = match (&self.config, &self.url) {
            (Some(path), url) => {
                let mut request = CrawlRequest::from_file(path)?;
                if let Some(url) = url {
                    request.start_url = url.trim().to_string();
                }
                request
            }
            (None, Some(url)) => CrawlRequest::new(url),
            (None, None) => return Err("a website URL or --config file is required".into()),
        };

        if let Some(max_pages) = self.max_pages {
            request.max_pages = max_pages;
        }
        if let Some(max_links) = self.max_links {
            request.max_internal_links_from_home = max_links;
        }
        if let Some(max_images) = self.max_images {
            request.max_images_total = max_images;
        }
        if let Some(timeout) = self.timeout {
            request.timeout_seconds = timeout;
        }

        if !is_probably_valid_url(&request.start_url) {
            return Err(format!(
                "'{}' is not a valid URL; it must start with http:// or https://",
                request.start_url
            )
            .into());
        }

        Ok(request)
    }

    /// Build the workflow configuration from the settings file and flag overrides,
    /// or `None` when neither names a workflow to reach
    pub fn workflow_config(&self) -> Result<Option<WorkflowConfig>, Box<dyn Error>> {
        let mut config = match &self.workflow_file {
            Some(path) => WorkflowConfig::from_file(path)?,
            None => {
                let Some(base_url) = self
                    .workflow_url
                    .as_deref()
                    .or(self.workflow_endpoint.as_deref())
                else {
                    return Ok(None);
                };
                WorkflowConfig::new(base_url)
            }
        };

        if let Some(base_url) = &self.workflow_url {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(mode) = self.workflow_mode {
            config.mode = mode.into();
        }
        if let Some(endpoint) = &self.workflow_endpoint {
            config.endpoint = Some(endpoint.clone());
        }
        if let Some(secret) = &self.workflow_secret {
            config.secret = Some(secret.clone());
        }
        Ok(Some(config))
    }
}

/// Light check on user input before a request is built
fn is_probably_valid_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
