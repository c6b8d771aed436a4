//! Minimal HTTP fetcher for static pages.
//!
//! - [`HttpClient::get_text`] performs one GET and returns the body as text
//! - Structured `tracing` events for request start, response, and errors
//! - No retry policy: a single attempt, failures propagate to the caller
//!
//! Example (no_run):
//! ```rust
//! # async fn demo() -> Result<(), plainview_http::HttpError> {
//! let url = url::Url::parse("https://example.com/").map_err(|e| {
//!     plainview_http::HttpError::Url(e.to_string())
//! })?;
//! let client = plainview_http::HttpClient::new()?;
//! let body = client.get_text(&url).await?;
//! # let _ = body; Ok(()) }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

// cap on the body excerpt attached to errors and trace events
const SNIPPET_MAX: usize = 500;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("invalid URL: {0}")]
    Url(String),
    #[error("client build failed: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {status}, body_snippet: {body_snippet}")]
    Status {
        status: StatusCode,
        body_snippet: String,
    },
}

/// Seam between the program glue and the transport, so tests can substitute
/// a canned page for the network.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_text(&self, url: &Url) -> Result<String, HttpError>;
}

/// Plain `reqwest`-backed fetcher.
#[derive(Clone)]
pub struct HttpClient {
    inner: Client,
    pub request_timeout: Duration,
}

impl HttpClient {
    /// Construct a client with a 5s connect timeout and 15s request timeout.
    pub fn new() -> Result<Self, HttpError> {
        let inner = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;
        Ok(Self {
            inner,
            request_timeout: Duration::from_secs(15),
        })
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, dur: Duration) -> Self {
        self.request_timeout = dur;
        self
    }

    /// GET `url` and return the response body decoded as text.
    ///
    /// Non-2xx statuses become [`HttpError::Status`] with a truncated body
    /// excerpt for diagnostics.
    pub async fn get_text(&self, url: &Url) -> Result<String, HttpError> {
        tracing::debug!(
            host_path = %format!("{}{}", url.domain().unwrap_or("-"), url.path()),
            timeout_ms = self.request_timeout.as_millis() as u64,
            "http.request.start"
        );

        let t0 = std::time::Instant::now();
        let resp = self
            .inner
            .get(url.clone())
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(|err| {
                let message = err.to_string();
                tracing::warn!(message = %message, "http.network_error.send");
                HttpError::Network(message)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|err| {
            let message = err.to_string();
            tracing::warn!(%status, message = %message, "http.network_error.body");
            HttpError::Network(message)
        })?;

        tracing::debug!(
            %status,
            duration_ms = t0.elapsed().as_millis() as u64,
            body_len = body.len(),
            "http.response"
        );

        if !status.is_success() {
            let body_snippet = snip_body(&body);
            tracing::warn!(%status, body_snippet = %body_snippet, "http.error");
            return Err(HttpError::Status {
                status,
                body_snippet,
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl PageFetcher for HttpClient {
    async fn fetch_text(&self, url: &Url) -> Result<String, HttpError> {
        self.get_text(url).await
    }
}

fn snip_body(body: &str) -> String {
    let mut snip = body.to_string();
    if snip.len() > SNIPPET_MAX {
        let mut cut = SNIPPET_MAX;
        while !snip.is_char_boundary(cut) {
            cut -= 1;
        }
        snip.truncate(cut);
        snip.push_str("...");
    }
    snip
}
