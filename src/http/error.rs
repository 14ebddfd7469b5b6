//! Error-to-response mapping for the API surface.
//!
//! Every failure body carries a single `detail` key: a list of field errors
//! for validation failures, a human-readable string for upstream failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::http::params::ParamError;
use crate::upstream::UpstreamError;

/// Failures a handler surfaces to the client.
#[derive(Debug)]
pub enum ApiError {
    /// One or more query parameters failed validation.
    Validation(Vec<ParamError>),
    /// The upstream source could not produce a usable snapshot.
    Upstream(UpstreamError),
}

impl From<UpstreamError> for ApiError {
    fn from(error: UpstreamError) -> Self {
        Self::Upstream(error)
    }
}

impl ApiError {
    /// Status code this error renders as.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(errors) => json!({ "detail": errors }),
            Self::Upstream(error) => json!({ "detail": error.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
