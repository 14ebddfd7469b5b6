//! Record model and upstream envelope decoding.
//!
//! # Design Decisions
//! - Records are opaque: the gateway inspects the `message` field and nothing
//!   else, and every field round-trips to the response verbatim
//! - Decoding is shape-tolerant: a missing or mistyped `items` key yields an
//!   empty batch instead of an error, so minor upstream schema drift does not
//!   take the gateway down

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One upstream-provided item.
///
/// Wraps the raw JSON value so unknown fields survive the round trip. The
/// `message` field is the only one the gateway ever reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Value);

impl Record {
    /// Wrap a raw JSON value as a record.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The record's `message` text.
    ///
    /// An absent or non-string `message` is treated as the empty string.
    pub fn message(&self) -> &str {
        self.0.get("message").and_then(Value::as_str).unwrap_or("")
    }

    /// Borrow the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// Extract records from the upstream `{"items": [...]}` envelope.
///
/// The caller has already established that `value` is valid JSON; anything
/// without a usable `items` array (missing key, wrong type, non-object top
/// level) decodes to an empty batch.
pub fn records_from_envelope(value: Value) -> Vec<Record> {
    match value.get("items").and_then(Value::as_array) {
        Some(items) => items.iter().cloned().map(Record::new).collect(),
        None => Vec::new(),
    }
}
