//! # Page Fetcher
//!
//! One GET against the schedule page per request. There is no retry: a failed
//! attempt is reported to the caller, which turns it into a 5xx response.

use async_trait::async_trait;
use eyre::{Result, WrapErr};
use reqwest::{redirect::Policy, Client};
use schedule_core::errors::{ScheduleError, ScheduleResult};
use tracing::{debug, warn};

use crate::config::FetchConfig;

/// Source of the raw schedule markup.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Returns the page body as text. Undecodable bytes are replaced, never fatal.
    async fn fetch_page(&self) -> ScheduleResult<String>;
}

/// Fetches the page over HTTP with a browser-like user agent.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    url: String,
}

impl HttpFetcher {
    /// Builds the underlying client with the configured timeout and redirect cap.
    ///
    /// # Errors
    ///
    /// Fails only if the TLS backend cannot be initialised or the user agent
    /// is not a valid header value.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .redirect(Policy::limited(config.max_redirects))
            .build()
            .wrap_err("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn classify(err: reqwest::Error) -> ScheduleError {
    if err.is_timeout() {
        ScheduleError::Timeout(err.to_string())
    } else {
        ScheduleError::Fetch(err.to_string())
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self) -> ScheduleResult<String> {
        debug!(url = %self.url, "Fetching schedule page");

        let response = self.client.get(&self.url).send().await.map_err(|err| {
            warn!(url = %self.url, error = %err, "Schedule page request failed");
            classify(err)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, %status, "Schedule page returned an error status");
            return Err(ScheduleError::UpstreamStatus(status.as_u16()));
        }

        // Decodes per the Content-Type charset, replacing malformed sequences.
        let body = response.text().await.map_err(classify)?;
        debug!(bytes = body.len(), "Fetched schedule page");

        Ok(body)
    }
}
