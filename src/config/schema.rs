//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Hosted message source queried when no upstream URL is configured.
pub const DEFAULT_UPSTREAM_URL: &str =
    "https://november7-730026606190.europe-west1.run.app/messages";

/// Root configuration for the search gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address, request timeout).
    pub listener: ListenerConfig,

    /// Upstream message source.
    pub upstream: UpstreamConfig,

    /// Snapshot acquisition strategy.
    pub snapshot: SnapshotConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Request timeout (total time for request/response) in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Upstream message source configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// URL of the JSON message endpoint.
    pub url: String,

    /// Fetch timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_UPSTREAM_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

/// Snapshot acquisition configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SnapshotConfig {
    /// When the upstream dataset is fetched.
    pub mode: SnapshotMode,
}

/// When the gateway fetches the upstream dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnapshotMode {
    /// Fetch once before the listener opens; serve that snapshot forever.
    Startup,
    /// Fetch a fresh dataset for every search request.
    PerRequest,
}

impl Default for SnapshotMode {
    fn default() -> Self {
        Self::Startup
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_full_defaults() {
        let config: GatewayConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.listener.request_timeout_secs, 30);
        assert_eq!(config.upstream.url, DEFAULT_UPSTREAM_URL);
        assert_eq!(config.upstream.timeout_secs, 10);
        assert_eq!(config.snapshot.mode, SnapshotMode::Startup);
        assert_eq!(config.observability.log_level, "info");
        assert!(config.observability.metrics_enabled);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [upstream]
            url = "http://localhost:9100/messages"

            [snapshot]
            mode = "per-request"
            "#,
        )
        .unwrap();
        assert_eq!(config.upstream.url, "http://localhost:9100/messages");
        assert_eq!(config.upstream.timeout_secs, 10);
        assert_eq!(config.snapshot.mode, SnapshotMode::PerRequest);
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn snapshot_mode_uses_kebab_case_on_the_wire() {
        let startup: SnapshotConfig = toml::from_str(r#"mode = "startup""#).unwrap();
        assert_eq!(startup.mode, SnapshotMode::Startup);

        let per_request: SnapshotConfig = toml::from_str(r#"mode = "per-request""#).unwrap();
        assert_eq!(per_request.mode, SnapshotMode::PerRequest);

        assert!(toml::from_str::<SnapshotConfig>(r#"mode = "hourly""#).is_err());
    }
}
