//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

use search_gateway::config::{GatewayConfig, SnapshotMode};
use search_gateway::http::HttpServer;
use search_gateway::lifecycle::{self, Shutdown};

/// Programmable upstream message source.
///
/// Serves one HTTP response per connection with the current status and body,
/// counting every request so tests can assert how often the gateway fetched.
pub struct MockUpstream {
    addr: SocketAddr,
    status: Arc<AtomicU16>,
    body: Arc<Mutex<String>>,
    hits: Arc<AtomicUsize>,
}

impl MockUpstream {
    /// Start a mock source on an ephemeral port serving the given items.
    pub async fn start(items: Value) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let status = Arc::new(AtomicU16::new(200));
        let body = Arc::new(Mutex::new(json!({ "items": items }).to_string()));
        let hits = Arc::new(AtomicUsize::new(0));

        {
            let status = status.clone();
            let body = body.clone();
            let hits = hits.clone();
            tokio::spawn(async move {
                loop {
                    match listener.accept().await {
                        Ok((mut socket, _)) => {
                            hits.fetch_add(1, Ordering::SeqCst);
                            let status = status.load(Ordering::SeqCst);
                            let payload = body.lock().unwrap().clone();
                            tokio::spawn(async move {
                                let status_text = match status {
                                    200 => "200 OK",
                                    404 => "404 Not Found",
                                    500 => "500 Internal Server Error",
                                    503 => "503 Service Unavailable",
                                    _ => "200 OK",
                                };
                                let response_str = format!(
                                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                                    status_text,
                                    payload.len(),
                                    payload
                                );
                                let _ = socket.write_all(response_str.as_bytes()).await;
                                let _ = socket.shutdown().await;
                            });
                        }
                        Err(_) => break,
                    }
                }
            });
        }

        Self {
            addr,
            status,
            body,
            hits,
        }
    }

    /// URL the gateway should fetch from.
    pub fn url(&self) -> String {
        format!("http://{}/messages", self.addr)
    }

    /// Change the status code served from now on.
    #[allow(dead_code)]
    pub fn set_status(&self, status: u16) {
        self.status.store(status, Ordering::SeqCst);
    }

    /// Replace the served dataset.
    #[allow(dead_code)]
    pub fn set_items(&self, items: Value) {
        *self.body.lock().unwrap() = json!({ "items": items }).to_string();
    }

    /// Replace the served body verbatim, JSON or not.
    #[allow(dead_code)]
    pub fn set_raw_body(&self, body: &str) {
        *self.body.lock().unwrap() = body.to_string();
    }

    /// Number of requests served so far.
    #[allow(dead_code)]
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Gateway config pointed at a mock upstream, metrics off.
pub fn gateway_config(upstream_url: String, mode: SnapshotMode) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.upstream.url = upstream_url;
    config.upstream.timeout_secs = 5;
    config.snapshot.mode = mode;
    config.observability.metrics_enabled = false;
    config
}

/// Initialize and spawn a gateway on an ephemeral port.
///
/// The listener is bound before this returns, so callers can send requests
/// immediately.
pub async fn spawn_gateway(config: GatewayConfig) -> (String, Shutdown) {
    let (state, fetcher) = lifecycle::initialize(&config)
        .await
        .expect("gateway startup failed");

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(&config, state);
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    // The server task owns the client handle, mirroring main: it is dropped
    // only once serving has stopped.
    tokio::spawn(async move {
        let _client_handle = fetcher;
        let _ = server.run(listener, server_shutdown).await;
    });

    (format!("http://{}", addr), shutdown)
}

/// Client that ignores any proxy environment variables.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Ten messages: three matching "paris" case-insensitively, three matching
/// "test", plus extra fields the gateway must pass through untouched.
pub fn sample_items() -> Value {
    json!([
        { "id": 1, "message": "Hello from Paris", "author": "amelie" },
        { "id": 2, "message": "Testing in London", "author": "jack" },
        { "id": 3, "message": "PARIS is beautiful", "author": "lea" },
        { "id": 4, "message": "Another test message", "author": "sam" },
        { "id": 5, "message": "Back to paris", "author": "nina" },
        { "id": 6, "message": "Something else", "author": "omar" },
        { "id": 7, "message": "Final test", "author": "iris" },
        { "id": 8, "message": "More data", "author": "theo" },
        { "id": 9, "message": "Night train to Berlin", "author": "jonas" },
        { "id": 10, "message": "Last item", "author": "mara" }
    ])
}
