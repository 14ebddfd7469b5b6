//! Query-string parsing and validation for the search endpoint.
//!
//! # Responsibilities
//! - Apply defaults for omitted `page` and `size`
//! - Reject out-of-range or non-integer values with field-level errors
//!
//! # Design Decisions
//! - Parameters arrive as raw strings so a non-integer value can be reported
//!   as a validation failure (422) instead of a generic deserialization
//!   rejection
//! - All violations are collected before returning, so a request with two bad
//!   fields gets two entries in the error detail

use serde::{Deserialize, Serialize};

use crate::store::SearchQuery;

/// Page number used when the client omits `page`.
pub const DEFAULT_PAGE: i64 = 1;
/// Page size used when the client omits `size`.
pub const DEFAULT_PAGE_SIZE: i64 = 10;
/// Largest accepted page size.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Raw query parameters as they appear on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Substring filter; omitted means "match everything".
    pub q: Option<String>,
    pub page: Option<String>,
    pub size: Option<String>,
}

/// One validation failure, attributed to the offending parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamError {
    pub field: &'static str,
    pub message: String,
}

impl ParamError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl SearchParams {
    /// Validate the raw parameters into a [`SearchQuery`], collecting every
    /// violation instead of stopping at the first.
    pub fn into_query(self) -> Result<SearchQuery, Vec<ParamError>> {
        let mut errors = Vec::new();

        let page = parse_bounded(self.page, "page", DEFAULT_PAGE, None, &mut errors);
        let size = parse_bounded(
            self.size,
            "size",
            DEFAULT_PAGE_SIZE,
            Some(MAX_PAGE_SIZE),
            &mut errors,
        );

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(SearchQuery {
            filter: self.q,
            page: page as usize,
            size: size as usize,
        })
    }
}

/// Parse one positive integer parameter, recording violations.
///
/// Returns the default on a parse failure so validation of the other fields
/// can continue; the caller never builds a query once `errors` is non-empty.
fn parse_bounded(
    raw: Option<String>,
    field: &'static str,
    default: i64,
    max: Option<i64>,
    errors: &mut Vec<ParamError>,
) -> i64 {
    let value = match raw {
        None => default,
        Some(text) => match text.parse::<i64>() {
            Ok(value) => value,
            Err(_) => {
                errors.push(ParamError::new(field, "must be a valid integer"));
                return default;
            }
        },
    };

    if value < 1 {
        errors.push(ParamError::new(field, "must be greater than or equal to 1"));
    } else if let Some(max) = max {
        if value > max {
            errors.push(ParamError::new(
                field,
                format!("must be less than or equal to {max}"),
            ));
        }
    }

    value
}
