use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

use crate::error::{Result, TranscriptError};

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; TranscriptDownloader/1.0; +https://www.fool.com/)";
pub const DEFAULT_TIMEOUT_SECS: f64 = 30.0;

/// Request settings handed to the fetcher
#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Source of transcript page HTML
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP fetcher; one GET per call, no retries.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let parsed = Url::parse(url).map_err(|_| TranscriptError::InvalidUrl(url.to_string()))?;

        debug!("GET {}", parsed);
        let response = self
            .client
            .get(parsed)
            .send()
            .map_err(TranscriptError::Request)
            .with_context(|| format!("request failed for {}", url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranscriptError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            }
            .into());
        }

        response
            .text()
            .map_err(TranscriptError::Request)
            .with_context(|| format!("failed reading response for {}", url))
    }
}
