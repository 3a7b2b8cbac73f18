use crate::hn::feeds::FeedKind;
use crate::hn::types::{FeedItem, Item, User};
use crate::util::{validate_base_url, BaseUrlError};
use futures::StreamExt;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use thiserror::Error;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.hnpwa.com/v0";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 8 * 1024 * 1024; // 8MB

/// Errors from a single upstream GET.
///
/// None of these are retried; they surface as GraphQL field errors.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Upstream request timed out after {0:?}")]
    Timeout(Duration),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    #[error("Response too large (exceeds {0} bytes)")]
    ResponseTooLarge(usize),
    #[error("Malformed upstream JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl UpstreamError {
    /// Upstream HTTP status, when the failure was a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::HttpStatus(status) => Some(*status),
            _ => None,
        }
    }
}

/// Client for the HNPWA REST API.
///
/// Cheap to clone; clones share the underlying connection pool.
/// Every method issues exactly one GET and never retries.
#[derive(Debug, Clone)]
pub struct HnClient {
    http: reqwest::Client,
    base_url: Url,
    timeout: Duration,
    max_response_bytes: usize,
}

impl HnClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// The base URL must be HTTPS, except for localhost (see [`validate_base_url`]).
    pub fn new(http: reqwest::Client, base_url: &str) -> Result<Self, BaseUrlError> {
        let base_url = Url::parse(&validate_base_url(base_url)?)?;
        Ok(Self {
            http,
            base_url,
            timeout: DEFAULT_TIMEOUT,
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_response_bytes(mut self, limit: usize) -> Self {
        self.max_response_bytes = limit;
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// `GET /item/{id}.json`. An upstream `null` body yields `Ok(None)`.
    pub async fn item(&self, id: i64) -> Result<Option<Item>, UpstreamError> {
        self.get_json(&["item", &format!("{id}.json")]).await
    }

    /// `GET /user/{id}.json`. The id is sent as a single encoded path segment.
    pub async fn user(&self, id: &str) -> Result<Option<User>, UpstreamError> {
        self.get_json(&["user", &format!("{id}.json")]).await
    }

    /// `GET /{kind}/{index}.json`.
    ///
    /// The page index is not checked here; callers validate it against
    /// [`FeedKind::page_count`] first.
    pub async fn feed(&self, kind: FeedKind, index: i64) -> Result<Vec<FeedItem>, UpstreamError> {
        self.get_json(&[kind.as_str(), &format!("{index}.json")])
            .await
    }

    /// Builds `{base}/{segments...}`, percent-encoding each segment.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // http(s) URLs always have a path, so this only fails for cannot-be-a-base URLs,
        // which validate_base_url never produces.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, UpstreamError> {
        let url = self.endpoint(segments);
        let started = Instant::now();

        tracing::debug!(url = %url, "Fetching upstream resource");

        let result = self.fetch_bytes(&url).await.and_then(|bytes| {
            serde_json::from_slice::<T>(&bytes).map_err(UpstreamError::Decode)
        });

        match &result {
            Ok(_) => tracing::debug!(
                url = %url,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Upstream fetch complete"
            ),
            Err(e) => tracing::warn!(
                url = %url,
                error = %e,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Upstream fetch failed"
            ),
        }

        result
    }

    /// Send and body read share a single deadline.
    async fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>, UpstreamError> {
        tokio::time::timeout(self.timeout, self.send_and_read(url))
            .await
            .map_err(|_| UpstreamError::Timeout(self.timeout))?
    }

    async fn send_and_read(&self, url: &Url) -> Result<Vec<u8>, UpstreamError> {
        let response = self
            .http
            .get(url.clone())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(UpstreamError::Network)?;

        if !response.status().is_success() {
            return Err(UpstreamError::HttpStatus(response.status().as_u16()));
        }

        read_limited_bytes(response, self.max_response_bytes).await
    }
}

async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, UpstreamError> {
    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if usize::try_from(len).map_or(true, |len| len > limit) {
            return Err(UpstreamError::ResponseTooLarge(limit));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(UpstreamError::Network)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(UpstreamError::ResponseTooLarge(limit));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}
