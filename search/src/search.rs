//! Binary search with bounded-width index arithmetic.

use std::cmp::Ordering;

use midpoint_common::BoundedInt;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, SearchError},
    trace::{SearchTrace, TraceRecord},
    Mode, LOG_TARGET, MIN_INDEX_BIT_WIDTH,
};

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Termination {
    /// The target sits at `index`.
    Found { index: usize },
    /// `low` passed `high`; the target is absent.
    Exhausted,
    /// The iteration counter reached the sequence length with the range still open.
    IterationCap { iterations: usize },
    /// The midpoint left `[-length, length)` and was not used to index the sequence.
    MidpointOutOfRange { mid: i64 },
}

impl Termination {
    /// Index of the target, or `-1`.
    pub fn index(&self) -> i64 {
        match self {
            Termination::Found { index } => *index as i64,
            _ => -1,
        }
    }

    /// True for the defensive stops. Those mean the index width is likely too narrow for
    /// the input, not that the target is absent.
    pub fn is_defensive(&self) -> bool {
        matches!(
            self,
            Termination::IterationCap { .. } | Termination::MidpointOutOfRange { .. }
        )
    }
}

/// Outcome of [`BinarySearch::run`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    pub mode: Mode,
    pub bit_width: u32,
    /// Index of the target, or `-1`.
    pub result: i64,
    pub termination: Termination,
    pub trace: SearchTrace,
}

impl SearchReport {
    pub fn found(&self) -> Option<usize> {
        match self.termination {
            Termination::Found { index } => Some(index),
            _ => None,
        }
    }
}

/// A binary search whose `low`, `high` and `mid` live in `bit_width`-bit signed integers.
#[derive(Debug, Clone, Copy)]
pub struct BinarySearch {
    mode: Mode,
    // zero in the index width, used to build every other index value
    origin: BoundedInt,
}

impl BinarySearch {
    pub fn new(mode: Mode, bit_width: u32) -> Result<Self> {
        let origin = BoundedInt::new(0, bit_width)?;
        if bit_width < MIN_INDEX_BIT_WIDTH {
            return Err(SearchError::IndexWidthTooNarrow(bit_width));
        }
        Ok(Self { mode, origin })
    }

    pub fn with_default_width(mode: Mode) -> Self {
        Self { mode, origin: BoundedInt::with_default_width(0) }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn bit_width(&self) -> u32 {
        self.origin.bit_width()
    }

    /// Midpoint of `low` and `high` under the configured strategy.
    pub fn midpoint(&self, low: BoundedInt, high: BoundedInt) -> BoundedInt {
        match self.mode {
            Mode::OverflowProne => (high + low).halve(),
            Mode::OverflowSafe => low + (high - low).halve(),
        }
    }

    /// Search the first `length` elements of `sequence` for `target`.
    pub fn run<T: Ord>(&self, sequence: &[T], target: &T, length: usize) -> SearchReport {
        self.run_with(sequence, target, length, |_| {})
    }

    /// Like [`BinarySearch::run`], handing each trace record to `observer` as it is produced.
    pub fn run_with<T, F>(
        &self,
        sequence: &[T],
        target: &T,
        length: usize,
        mut observer: F,
    ) -> SearchReport
    where
        T: Ord,
        F: FnMut(&TraceRecord),
    {
        let _span = tracing::debug_span!(
            target: LOG_TARGET,
            "search",
            mode = %self.mode,
            bit_width = self.bit_width(),
            length
        )
        .entered();

        let one = self.origin.with_value(1);
        let mut low = self.origin;
        let mut high = self.origin.with_value(length as i128 - 1);

        let mut trace = SearchTrace::default();
        let mut iteration = 0;

        let termination = loop {
            if low > high {
                break Termination::Exhausted;
            }
            iteration += 1;

            let mid = self.midpoint(low, high);
            let record = TraceRecord { iteration, low, high, mid };
            tracing::debug!(target: LOG_TARGET, %iteration, %low, %high, %mid);
            observer(&record);
            trace.push(record);

            let Some((index, probe)) = resolve_index(mid, length)
                .and_then(|index| Some((index, sequence.get(index)?)))
            else {
                tracing::warn!(
                    target: LOG_TARGET,
                    %mid,
                    length,
                    "midpoint left the index range, stopping"
                );
                break Termination::MidpointOutOfRange { mid: mid.value() };
            };

            match probe.cmp(target) {
                Ordering::Less => low = mid + one,
                Ordering::Greater => high = mid - one,
                Ordering::Equal => break Termination::Found { index },
            }

            if low <= high && iteration >= length {
                tracing::warn!(
                    target: LOG_TARGET,
                    iterations = iteration,
                    "iteration cap reached, the search entered a forever loop"
                );
                break Termination::IterationCap { iterations: iteration };
            }
        };

        tracing::debug!(target: LOG_TARGET, ?termination, iterations = trace.len());

        SearchReport {
            mode: self.mode,
            bit_width: self.bit_width(),
            result: termination.index(),
            termination,
            trace,
        }
    }
}

/// Position probed for `mid`. Negative midpoints down to `-length` count back from the end,
/// so a wrapped midpoint still reads an element instead of ending the search.
fn resolve_index(mid: BoundedInt, length: usize) -> Option<usize> {
    let (mid, length) = (i128::from(mid), length as i128);
    let index = if mid < 0 { length + mid } else { mid };
    (0..length).contains(&index).then_some(index as usize)
}

/// Search with the default 8-bit index width. Returns the index of `target`, or `-1`.
pub fn search<T: Ord>(sequence: &[T], target: &T, length: usize, mode: Mode) -> i64 {
    BinarySearch::with_default_width(mode)
        .run(sequence, target, length)
        .result
}
