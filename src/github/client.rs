//! Single-shot HTTP GET client for the GitHub REST API.
//!
//! The client only moves bytes. It does not interpret status codes because
//! GitHub reports missing users and repositories through a `message` field in
//! the JSON body, which the resolvers classify.

use std::time::Duration;

use async_trait::async_trait;
use http::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::Client;
use url::Url;

use super::error::LookupError;

/// Per-call timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Fetches the raw body behind a URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Performs one GET and returns the complete, non-empty body.
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, LookupError>;
}

/// `reqwest`-backed upstream client.
#[derive(Debug, Clone)]
pub struct HttpUpstreamClient {
    client: Client,
}

impl HttpUpstreamClient {
    /// Wraps an existing `reqwest` client.
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client whose calls give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` builder error when the TLS backend cannot be
    /// initialised.
    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));

        Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map(Self::new)
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstreamClient {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, LookupError> {
        tracing::debug!(%url, "fetching");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|error| LookupError::Network {
                message: format!("GET {url} failed: {error}"),
            })?;

        tracing::debug!(%url, status = %response.status(), "upstream responded");

        let body = response.bytes().await.map_err(|error| LookupError::Body {
            message: format!("GET {url}: {error}"),
        })?;

        if body.is_empty() {
            return Err(LookupError::EmptyBody);
        }

        Ok(body.to_vec())
    }
}
