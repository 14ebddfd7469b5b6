//! Shared HTTP client handle.
//!
//! # Responsibilities
//! - Build the one reusable `reqwest::Client` for the process
//! - Apply the fixed upstream request timeout at construction time
//!
//! The handle is created exactly once during startup and owned by the
//! lifecycle code; everything else works with cheap clones of it and cannot
//! close it. Dropping the last clone at process exit releases the underlying
//! connection pool on every exit path.

use std::time::Duration;

use crate::config::UpstreamConfig;

/// Build the process-wide HTTP client with the configured total timeout.
pub fn build_client(config: &UpstreamConfig) -> Result<reqwest::Client, reqwest::Error> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()?;

    tracing::info!(timeout_secs = config.timeout_secs, "HTTP client created");
    Ok(client)
}
