//! In-memory record store: snapshot types, acquisition strategies, and the
//! search engine that runs over them.
//!
//! # Data Flow
//!
//! ```text
//! upstream fetch ──> Vec<Record> ──> Snapshot ──> SnapshotStore
//!                                                     │
//!                              search(records, query) ◄┘
//!                                      │
//!                                      ▼
//!                                  SearchPage
//! ```

pub mod query;
pub mod record;
pub mod snapshot;
pub mod store;

pub use query::{search, SearchPage, SearchQuery};
pub use record::Record;
pub use snapshot::Snapshot;
pub use store::{LiveSnapshotStore, SnapshotStore, StaticSnapshotStore};
