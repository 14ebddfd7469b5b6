//! Lifecycle tests: fail-fast startup and the two serving modes.

mod common;

use std::time::Duration;

use common::{client, gateway_config, sample_items, spawn_gateway, MockUpstream};
use search_gateway::config::SnapshotMode;
use search_gateway::lifecycle::{initialize, StartupError, Shutdown};
use serde_json::{json, Value};

async fn start_gateway(mode: SnapshotMode) -> (MockUpstream, String, Shutdown) {
    let upstream = MockUpstream::start(sample_items()).await;
    let config = gateway_config(upstream.url(), mode);
    let (base_url, shutdown) = spawn_gateway(config).await;
    (upstream, base_url, shutdown)
}

async fn search(base_url: &str) -> (reqwest::StatusCode, Value) {
    let res = client()
        .get(format!("{}/search", base_url))
        .send()
        .await
        .expect("gateway unreachable");
    let status = res.status();
    (status, res.json().await.expect("response was not JSON"))
}

#[tokio::test]
async fn test_startup_prefetch_failure_is_fatal() {
    let upstream = MockUpstream::start(sample_items()).await;
    upstream.set_status(500);
    let config = gateway_config(upstream.url(), SnapshotMode::Startup);

    let error = initialize(&config).await.unwrap_err();
    assert!(matches!(error, StartupError::Prefetch(_)));
}

#[tokio::test]
async fn test_unreachable_upstream_is_fatal_at_startup() {
    // Grab a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = gateway_config(format!("http://{}/messages", addr), SnapshotMode::Startup);
    let error = initialize(&config).await.unwrap_err();
    assert!(matches!(error, StartupError::Prefetch(_)));
}

#[tokio::test]
async fn test_client_handle_outlives_initialization() {
    let upstream = MockUpstream::start(sample_items()).await;
    let config = gateway_config(upstream.url(), SnapshotMode::Startup);

    let (_state, fetcher) = initialize(&config).await.unwrap();
    assert_eq!(upstream.hits(), 1);

    // The handle handed back to the caller is still live after the
    // prefetch; only dropping it at process stop releases the pool.
    let records = fetcher.fetch().await.unwrap();
    assert_eq!(records.len(), 10);
    assert_eq!(upstream.hits(), 2);
}

#[tokio::test]
async fn test_startup_mode_fetches_exactly_once() {
    let (upstream, base_url, shutdown) = start_gateway(SnapshotMode::Startup).await;
    assert_eq!(upstream.hits(), 1);

    for _ in 0..5 {
        let (status, _) = search(&base_url).await;
        assert_eq!(status, 200);
    }
    assert_eq!(upstream.hits(), 1);

    shutdown.trigger();
}

#[tokio::test]
async fn test_startup_snapshot_ignores_upstream_changes() {
    let (upstream, base_url, shutdown) = start_gateway(SnapshotMode::Startup).await;

    let (_, before) = search(&base_url).await;
    assert_eq!(before["total"], 10);

    // Rewrite the dataset, then take the upstream down entirely.
    upstream.set_items(json!([{ "message": "brand new" }]));
    upstream.set_status(500);

    let (status, after) = search(&base_url).await;
    assert_eq!(status, 200);
    assert_eq!(after["total"], 10);
    assert_eq!(upstream.hits(), 1);

    shutdown.trigger();
}

#[tokio::test]
async fn test_per_request_mode_sees_fresh_data() {
    let (upstream, base_url, shutdown) = start_gateway(SnapshotMode::PerRequest).await;
    assert_eq!(upstream.hits(), 0);

    let (_, first) = search(&base_url).await;
    assert_eq!(first["total"], 10);
    assert_eq!(upstream.hits(), 1);

    upstream.set_items(json!([{ "message": "only one left" }]));

    let (_, second) = search(&base_url).await;
    assert_eq!(second["total"], 1);
    assert_eq!(upstream.hits(), 2);

    shutdown.trigger();
}

#[tokio::test]
async fn test_per_request_failures_do_not_poison_later_requests() {
    let (upstream, base_url, shutdown) = start_gateway(SnapshotMode::PerRequest).await;

    upstream.set_status(503);
    let (status, _) = search(&base_url).await;
    assert_eq!(status, 502);

    upstream.set_status(200);
    let (status, body) = search(&base_url).await;
    assert_eq!(status, 200);
    assert_eq!(body["total"], 10);

    shutdown.trigger();
}

#[tokio::test]
async fn test_concurrent_per_request_searches_all_succeed() {
    let (upstream, base_url, shutdown) = start_gateway(SnapshotMode::PerRequest).await;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let base_url = base_url.clone();
        handles.push(tokio::spawn(async move {
            let res = client()
                .get(format!("{}/search", base_url))
                .send()
                .await
                .unwrap();
            let status = res.status();
            let body: Value = res.json().await.unwrap();
            (status, body)
        }));
    }
    for handle in handles {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, 200);
        assert_eq!(body["total"], 10);
    }
    assert_eq!(upstream.hits(), 8);

    shutdown.trigger();
}

#[tokio::test]
async fn test_shutdown_stops_accepting_connections() {
    let (_upstream, base_url, shutdown) = start_gateway(SnapshotMode::Startup).await;

    let (status, _) = search(&base_url).await;
    assert_eq!(status, 200);

    shutdown.trigger();
    tokio::time::sleep(Duration::from_millis(300)).await;

    let result = client().get(format!("{}/search", base_url)).send().await;
    assert!(result.is_err(), "listener should be closed after shutdown");
}
