use std::fmt;

use midpoint_common::BoundedInt;
use serde::{Deserialize, Serialize};

/// One iteration of the search loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRecord {
    /// 1-based iteration counter.
    pub iteration: usize,
    /// Lower bound when the midpoint was computed.
    pub low: BoundedInt,
    /// Upper bound when the midpoint was computed.
    pub high: BoundedInt,
    /// Midpoint probed in this iteration.
    pub mid: BoundedInt,
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Loop {}: low = {}\t high = {}\t mid = {}",
            self.iteration, self.low, self.high, self.mid
        )
    }
}

/// The iterations of a single search, in order.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchTrace {
    records: Vec<TraceRecord>,
}

impl SearchTrace {
    pub(crate) fn push(&mut self, record: TraceRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TraceRecord> + '_ {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&TraceRecord> {
        self.records.last()
    }

    /// Midpoints in probe order.
    pub fn midpoints(&self) -> Vec<i64> {
        self.records.iter().map(|r| r.mid.value()).collect()
    }
}

impl<'a> IntoIterator for &'a SearchTrace {
    type Item = &'a TraceRecord;
    type IntoIter = std::slice::Iter<'a, TraceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
