//! Substring filtering and offset pagination over a snapshot.
//!
//! # Responsibilities
//! - Retain records whose `message` contains the filter, case-insensitively
//! - Slice the retained sequence into the requested page
//!
//! # Design Decisions
//! - Pure function over a borrowed snapshot: no side effects, no hidden state
//! - Whitespace in the filter is significant (no trimming)
//! - Index arithmetic saturates, so any accepted page/size is panic-free and
//!   an out-of-range page yields an empty result set with `total` intact

use serde::Serialize;

use crate::store::record::Record;

/// A validated search request.
///
/// The HTTP boundary guarantees `page >= 1` and `size` in `[1, 100]` before
/// this type is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Substring filter applied to the `message` field; `None` or empty
    /// retains every record.
    pub filter: Option<String>,
    /// 1-based page number.
    pub page: usize,
    /// Records per page.
    pub size: usize,
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPage {
    /// Count of records matching the filter across the whole snapshot.
    pub total: usize,
    /// Echo of the requested page number.
    pub page: usize,
    /// Echo of the requested page size.
    pub size: usize,
    /// The records on this page, in snapshot order.
    pub results: Vec<Record>,
}

/// Run a query against a snapshot of records.
pub fn search(records: &[Record], query: &SearchQuery) -> SearchPage {
    let matched: Vec<&Record> = match query.filter.as_deref() {
        Some(filter) if !filter.is_empty() => {
            let needle = filter.to_lowercase();
            records
                .iter()
                .filter(|record| record.message().to_lowercase().contains(&needle))
                .collect()
        }
        _ => records.iter().collect(),
    };

    let total = matched.len();
    let start = query
        .page
        .saturating_sub(1)
        .saturating_mul(query.size)
        .min(total);
    let end = start.saturating_add(query.size).min(total);

    SearchPage {
        total,
        page: query.page,
        size: query.size,
        results: matched[start..end].iter().map(|r| (*r).clone()).collect(),
    }
}
