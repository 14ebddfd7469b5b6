//! Upstream fetch subsystem.
//!
//! # Data Flow
//! ```text
//! startup:
//!     config → client.rs (build shared reqwest::Client, fixed timeout)
//!
//! per fetch:
//!     fetcher.rs → GET upstream URL
//!         → status check (non-2xx = UpstreamError)
//!         → JSON parse (malformed = UpstreamError)
//!         → lenient `items` extraction (missing = empty batch)
//!         → Vec<Record>
//! ```
//!
//! # Design Decisions
//! - One client handle for the whole process; components hold clones
//! - A single failed attempt is terminal for that call (no retries)

pub mod client;
pub mod fetcher;

pub use client::build_client;
pub use fetcher::{MessageFetcher, UpstreamError};
