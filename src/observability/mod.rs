//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers / upstream fetcher
//!     → tracing events (stdout, filtered by RUST_LOG or config)
//!     → metrics.rs (counters, gauges, histograms)
//!         → Prometheus scrape endpoint
//! ```
//!
//! # Design Decisions
//! - Request ID flows through log events via the x-request-id header
//! - Metric updates are atomic increments, cheap enough for every request

pub mod metrics;
