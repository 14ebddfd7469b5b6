//! Upstream message fetching.
//!
//! # Responsibilities
//! - Issue one GET against the fixed upstream URL per call
//! - Classify transport, status, and decode failures into `UpstreamError`
//! - Decode the `{"items": [...]}` envelope leniently
//!
//! # Design Decisions
//! - No retries: a single failed attempt is surfaced to the caller
//! - Malformed top-level JSON is an error; a missing or mistyped `items`
//!   key is tolerated as an empty batch (upstream schema drift)

use thiserror::Error;
use url::Url;

use crate::observability::metrics;
use crate::store::record::{records_from_envelope, Record};

/// Errors that can occur while fetching from the upstream source.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The connection could not be established or broke mid-transfer.
    #[error("upstream connection error: {0}")]
    Connection(#[source] reqwest::Error),

    /// The request exceeded the client's fixed timeout.
    #[error("upstream request timed out after {0} seconds")]
    Timeout(u64),

    /// The upstream answered with a non-success status code.
    #[error("upstream returned error status {0}")]
    Status(u16),

    /// The response body was not parseable JSON.
    #[error("upstream response was not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

impl UpstreamError {
    /// Short label for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Connection(_) => "connection",
            UpstreamError::Timeout(_) => "timeout",
            UpstreamError::Status(_) => "status",
            UpstreamError::Decode(_) => "decode",
        }
    }
}

/// Fetches the current message list from the upstream source.
///
/// Holds a clone of the shared HTTP client; the fetcher never closes it.
#[derive(Debug, Clone)]
pub struct MessageFetcher {
    client: reqwest::Client,
    url: Url,
    timeout_secs: u64,
}

impl MessageFetcher {
    /// Create a fetcher bound to a fixed upstream URL.
    pub fn new(client: reqwest::Client, url: Url, timeout_secs: u64) -> Self {
        Self {
            client,
            url,
            timeout_secs,
        }
    }

    /// The upstream URL this fetcher targets.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch the full record list with a single GET.
    pub async fn fetch(&self) -> Result<Vec<Record>, UpstreamError> {
        match self.fetch_records().await {
            Ok(records) => {
                tracing::debug!(records = records.len(), "Upstream fetch succeeded");
                metrics::record_upstream_fetch("success");
                metrics::record_snapshot_size(records.len());
                Ok(records)
            }
            Err(e) => {
                metrics::record_upstream_fetch(e.kind());
                Err(e)
            }
        }
    }

    async fn fetch_records(&self) -> Result<Vec<Record>, UpstreamError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;
        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(UpstreamError::Decode)?;

        Ok(records_from_envelope(value))
    }

    fn classify(&self, error: reqwest::Error) -> UpstreamError {
        if error.is_timeout() {
            UpstreamError::Timeout(self.timeout_secs)
        } else {
            UpstreamError::Connection(error)
        }
    }
}
