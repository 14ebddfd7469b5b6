//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the upstream HTTP client
//! - Choose the snapshot strategy for the configured mode
//! - Prefetch the snapshot in startup mode, refusing to serve on failure
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal and reported before the listener
//!   opens
//! - The strategy choice is made exactly once; handlers never branch on mode

use std::sync::Arc;

use thiserror::Error;
use url::Url;

use crate::config::{GatewayConfig, SnapshotMode};
use crate::http::server::AppState;
use crate::store::{LiveSnapshotStore, Snapshot, SnapshotStore, StaticSnapshotStore};
use crate::upstream::{build_client, MessageFetcher, UpstreamError};

/// Fatal initialization failures.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("initial snapshot fetch failed: {0}")]
    Prefetch(#[from] UpstreamError),
}

/// Initialize the upstream side and produce the application state.
///
/// In startup mode the snapshot is fetched here, so an unreachable or
/// malformed upstream aborts the boot instead of surfacing on the first
/// request.
///
/// The fetcher owning the client handle is handed back to the caller, who
/// keeps it alive for the whole serving period and drops it exactly once at
/// process stop.
pub async fn initialize(
    config: &GatewayConfig,
) -> Result<(AppState, MessageFetcher), StartupError> {
    let url = Url::parse(&config.upstream.url)?;
    let client = build_client(&config.upstream)?;
    let fetcher = MessageFetcher::new(client, url, config.upstream.timeout_secs);

    let store: Arc<dyn SnapshotStore> = match config.snapshot.mode {
        SnapshotMode::Startup => {
            tracing::info!(url = %fetcher.url(), "Prefetching snapshot");
            let records = fetcher.fetch().await?;
            tracing::info!(
                records = records.len(),
                "Snapshot cached for process lifetime"
            );
            Arc::new(StaticSnapshotStore::new(Snapshot::new(records)))
        }
        SnapshotMode::PerRequest => {
            tracing::info!(url = %fetcher.url(), "Per-request fetch mode, skipping prefetch");
            Arc::new(LiveSnapshotStore::new(fetcher.clone()))
        }
    };

    Ok((AppState { store }, fetcher))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn malformed_upstream_url_fails_fast() {
        let mut config = GatewayConfig::default();
        config.upstream.url = "not a url".to_string();

        let error = initialize(&config).await.unwrap_err();
        assert!(matches!(error, StartupError::InvalidUrl(_)));
    }
}
