//! Snapshot acquisition strategies.
//!
//! The two serving modes differ only in where a request's snapshot comes
//! from, so the handler talks to a [`SnapshotStore`] trait object and the
//! choice is made once at startup.
//!
//! # Design Decisions
//! - `StaticSnapshotStore` holds the snapshot fetched before the listener
//!   opened; cloning it is an `Arc` bump, so reads never lock
//! - `LiveSnapshotStore` performs a full fetch per call and holds no state
//!   between calls, so one failed request cannot poison the next

use async_trait::async_trait;

use crate::store::snapshot::Snapshot;
use crate::upstream::fetcher::{MessageFetcher, UpstreamError};

/// Source of the record snapshot a request is answered from.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Produce the snapshot to answer the current request from.
    async fn current_snapshot(&self) -> Result<Snapshot, UpstreamError>;
}

/// Serves every request from one snapshot fetched at startup.
pub struct StaticSnapshotStore {
    snapshot: Snapshot,
}

impl StaticSnapshotStore {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl SnapshotStore for StaticSnapshotStore {
    async fn current_snapshot(&self) -> Result<Snapshot, UpstreamError> {
        Ok(self.snapshot.clone())
    }
}

/// Fetches a fresh snapshot from the upstream for every request.
pub struct LiveSnapshotStore {
    fetcher: MessageFetcher,
}

impl LiveSnapshotStore {
    pub fn new(fetcher: MessageFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl SnapshotStore for LiveSnapshotStore {
    async fn current_snapshot(&self) -> Result<Snapshot, UpstreamError> {
        let records = self.fetcher.fetch().await?;
        Ok(Snapshot::new(records))
    }
}
