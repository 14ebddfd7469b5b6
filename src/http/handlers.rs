//! Request handlers for the public API.
//!
//! # Responsibilities
//! - Serve the status line on `/`
//! - Validate, execute, and render searches on `/search`
//!
//! # Data Flow
//!
//! ```text
//! GET /search ──> validate params ──┬─ 422 detail list
//!                                   │
//!                         snapshot ─┴─ 502 detail string
//!                             │
//!                             ▼
//!                    search(records, query) ──> 200 SearchPage
//! ```

use std::time::Instant;

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::params::SearchParams;
use crate::http::request::X_REQUEST_ID;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::store::search;

/// Liveness line served on `/`, stable for the life of the process.
pub const STATUS_LINE: &str = concat!(
    env!("CARGO_PKG_NAME"),
    " ",
    env!("CARGO_PKG_VERSION"),
    " running"
);

/// Body served on `/`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// Report that the gateway is up.
pub async fn get_status() -> Json<StatusResponse> {
    let started = Instant::now();
    metrics::record_request("/", 200, started);
    Json(StatusResponse {
        status: STATUS_LINE,
    })
}

/// Search the message snapshot.
///
/// Query parameters: `q` (optional substring filter), `page` (1-based,
/// default 1), `size` (default 10, max 100).
pub async fn search_messages(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> Response {
    let started = Instant::now();
    let request_id = headers
        .get(&X_REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let query = match params.into_query() {
        Ok(query) => query,
        Err(errors) => {
            tracing::debug!(
                request_id = %request_id,
                violations = errors.len(),
                "Rejected invalid search parameters"
            );
            metrics::record_request("/search", 422, started);
            return ApiError::Validation(errors).into_response();
        }
    };

    let snapshot = match state.store.current_snapshot().await {
        Ok(snapshot) => snapshot,
        Err(error) => {
            tracing::error!(
                request_id = %request_id,
                kind = error.kind(),
                error = %error,
                "Upstream fetch failed"
            );
            metrics::record_request("/search", 502, started);
            return ApiError::from(error).into_response();
        }
    };

    let page = search(snapshot.records(), &query);
    tracing::debug!(
        request_id = %request_id,
        filter = query.filter.as_deref().unwrap_or(""),
        total = page.total,
        returned = page.results.len(),
        "Search served"
    );
    metrics::record_request("/search", 200, started);
    Json(page).into_response()
}
