//! HTTP client for page fetching.
//!
//! Thin wrapper over `reqwest` configured for polite crawling: request
//! timeout, stable user agent, gzip, cookie store and a bounded redirect
//! policy. Each fetch is a single attempt; pacing between requests is the
//! caller's concern (`crawling::pacing`).

use std::time::Duration;

use reqwest::{Client, ClientBuilder, StatusCode};
use thiserror::Error;
use tracing::debug;

/// Errors produced by a single page fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request for {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: StatusCode },

    #[error("empty response body from {url}")]
    EmptyBody { url: String },
}

/// Configuration for HTTP client behavior.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
    /// Whether to follow redirects
    pub follow_redirects: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: concat!("jobcrawl/", env!("CARGO_PKG_VERSION")).to_string(),
            follow_redirects: true,
        }
    }
}

/// HTTP client issuing one GET per call, no retries.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration.
    pub fn with_config(config: HttpClientConfig) -> anyhow::Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .cookie_store(true)
            .gzip(true)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(10)
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()?;

        Ok(Self { client, config })
    }

    /// The user agent this client identifies as.
    pub fn user_agent(&self) -> &str {
        &self.config.user_agent
    }

    /// Fetch the document body at `url`.
    ///
    /// A network error, a non-2xx status and an empty body are all reported
    /// as [`FetchError`]; the caller decides whether that is fatal.
    pub async fn fetch_html_string(&self, url: &str) -> Result<String, FetchError> {
        debug!("HTTP GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

        if body.is_empty() {
            return Err(FetchError::EmptyBody {
                url: url.to_string(),
            });
        }

        Ok(body)
    }
}
