//! Client for the external ad-generation workflow
//!
//! Crawl output is posted to a webhook of the workflow engine, which answers
//! with a business summary and a set of poster concepts. The crawler itself
//! never depends on this module.

use crate::config::WorkflowConfig;
use crate::results::CrawlResult;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;
use thiserror::Error;

/// Errors talking to the workflow engine
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("workflow request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("workflow returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode workflow response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Payload posted to the workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub source_url: String,
    pub extracted_text: String,
    pub image_urls: Vec<String>,
}

impl From<&CrawlResult> for Submission {
    fn from(result: &CrawlResult) -> Self {
        Self {
            source_url: result.start_url.clone(),
            extracted_text: result.text.clone(),
            image_urls: result.image_urls.clone(),
        }
    }
}

/// One advertising poster idea
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosterConcept {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub subhead: String,
    #[serde(default)]
    pub cta: String,
}

/// What the workflow sends back; unknown fields are kept in `extra`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowResponse {
    #[serde(default)]
    pub business_summary: String,

    #[serde(default)]
    pub poster_concepts: Vec<PosterConcept>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WorkflowResponse {
    /// Decode a response body. An empty body is an empty response, and a
    /// JSON array (one entry per workflow item) yields its first item.
    pub fn from_body(body: &str) -> Result<Self, WorkflowError> {
        if body.trim().is_empty() {
            return Ok(Self::default());
        }

        let value = match serde_json::from_str(body)? {
            Value::Array(items) => items.into_iter().next().unwrap_or(Value::Null),
            other => other,
        };
        if value.is_null() {
            return Ok(Self::default());
        }

        Ok(serde_json::from_value(value)?)
    }
}

/// Posts crawl results to the configured webhook
pub struct WorkflowClient {
    client: Client,
    config: WorkflowConfig,
}

impl WorkflowClient {
    pub fn new(config: WorkflowConfig) -> Result<Self, WorkflowError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { client, config })
    }

    /// Submit crawl output and decode the workflow's answer
    pub async fn submit(&self, submission: &Submission) -> Result<WorkflowResponse, WorkflowError> {
        let endpoint = self.config.endpoint_url();
        ::log::info!(
            "Submitting {} chars and {} images from {} to {}",
            submission.extracted_text.len(),
            submission.image_urls.len(),
            submission.source_url,
            endpoint
        );

        let mut request = self
            .client
            .post(&endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(submission);
        if let Some(secret) = &self.config.secret {
            request = request.header(self.config.secret_header.as_str(), secret.as_str());
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            ::log::error!("Workflow at {} returned {}", endpoint, status);
            return Err(WorkflowError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let decoded = WorkflowResponse::from_body(&body)?;
        ::log::debug!(
            "Workflow returned {} poster concepts",
            decoded.poster_concepts.len()
        );
        Ok(decoded)
    }
}
