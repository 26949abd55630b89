//! Timed HTTP GET used by every grading target.
//!
//! The [`Fetch`] trait is the seam between the graders and the network:
//! production code uses [`HttpFetcher`], tests substitute stubs. A response with
//! any status code is data, not an error; only transport failures surface as
//! [`FetchError`].

use async_trait::async_trait;
use reqwest::{Client, redirect};
use std::time::Duration;
use thiserror::Error;

use crate::config::AppConfig;

/// Transport-level failure while fetching a URL.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection refused, DNS failure, timeout, or a body that could not be read.
    #[error("{url} is unreachable: {reason}")]
    Unreachable { url: String, reason: String },
    /// The URL could not be turned into a request.
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
    /// The HTTP client itself could not be configured.
    #[error("http client setup failed: {0}")]
    Client(String),
}

/// Body and status of a completed GET.
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    pub url: String,
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchedResponse {
    pub fn new(url: impl Into<String>, status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    /// The body as UTF-8 text.
    pub fn text(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.body)
    }
}

/// Performs a single GET and returns whatever the server answered.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn get(&self, url: &str) -> Result<FetchedResponse, FetchError>;
}

/// reqwest-backed [`Fetch`] with a fixed per-request timeout and no retries.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .redirect(redirect::Policy::limited(10))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;
        Ok(Self { client })
    }

    /// Builds a fetcher from the global [`AppConfig`].
    pub fn from_config() -> Result<Self, FetchError> {
        let cfg = AppConfig::global();
        Self::new(cfg.request_timeout(), &cfg.user_agent)
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn get(&self, url: &str) -> Result<FetchedResponse, FetchError> {
        let unreachable = |e: reqwest::Error| FetchError::Unreachable {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let request = self
            .client
            .get(url)
            .build()
            .map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;

        let resp = self.client.execute(request).await.map_err(unreachable)?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(unreachable)?;

        tracing::debug!(url, status, bytes = body.len(), "GET");
        Ok(FetchedResponse::new(url, status, body.to_vec()))
    }
}
