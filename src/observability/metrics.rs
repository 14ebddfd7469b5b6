//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): requests by route and status code
//! - `gateway_request_duration_seconds` (histogram): latency by route
//! - `gateway_upstream_fetches_total` (counter): upstream fetches by outcome
//! - `gateway_snapshot_records` (gauge): record count of the serving snapshot
//!
//! # Design Decisions
//! - Route labels are static strings, so cardinality stays bounded
//! - A scrape endpoint that fails to start is logged and the gateway keeps
//!   serving; metrics are never worth an outage

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus exposition endpoint and register metric metadata.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics endpoint started");
        }
        Err(error) => {
            tracing::error!(error = %error, "Failed to start metrics endpoint");
            return;
        }
    }

    describe_counter!(
        "gateway_requests_total",
        "Requests served, labelled by route and status code"
    );
    describe_histogram!(
        "gateway_request_duration_seconds",
        "Request latency in seconds, labelled by route"
    );
    describe_counter!(
        "gateway_upstream_fetches_total",
        "Upstream fetch attempts, labelled by outcome"
    );
    describe_gauge!(
        "gateway_snapshot_records",
        "Record count of the most recently decoded snapshot"
    );
}

/// Record one served request.
pub fn record_request(route: &'static str, status: u16, started: Instant) {
    counter!(
        "gateway_requests_total",
        "route" => route,
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("gateway_request_duration_seconds", "route" => route)
        .record(started.elapsed().as_secs_f64());
}

/// Record one upstream fetch attempt.
///
/// `outcome` is `"success"` or an [`UpstreamError::kind`] label.
///
/// [`UpstreamError::kind`]: crate::upstream::UpstreamError::kind
pub fn record_upstream_fetch(outcome: &'static str) {
    counter!("gateway_upstream_fetches_total", "outcome" => outcome).increment(1);
}

/// Record the size of a freshly decoded snapshot.
pub fn record_snapshot_size(count: usize) {
    gauge!("gateway_snapshot_records").set(count as f64);
}
