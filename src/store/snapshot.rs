//! Immutable record snapshots.

use std::sync::Arc;

use crate::store::record::Record;

/// An ordered, immutable sequence of records.
///
/// Insertion order is preserved exactly as the upstream returned it. The
/// records sit behind an `Arc`, so cloning a snapshot is a pointer copy and
/// concurrent readers never need a lock.
#[derive(Debug, Clone)]
pub struct Snapshot {
    records: Arc<[Record]>,
}

impl Snapshot {
    /// Freeze a batch of records into a snapshot.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// The records in upstream order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the snapshot holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<Record>> for Snapshot {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}
