//! Binary search over bounded-width indices.
//!
//! The search keeps `low`, `high` and `mid` in [`BoundedInt`]s, so on a narrow index width the
//! classic `(low + high) / 2` midpoint silently wraps negative. [`Mode`] selects between that
//! overflow-prone formula and the overflow-safe `low + (high - low) / 2`.

pub mod error;
pub mod mode;
pub mod search;
pub mod trace;

pub use midpoint_common::BoundedInt;

pub use error::{Result, SearchError};
pub use mode::Mode;
pub use search::{search, BinarySearch, SearchReport, Termination};
pub use trace::{SearchTrace, TraceRecord};

pub const LOG_TARGET: &str = "midpoint::search";

/// Narrowest index width a search accepts; `0` and `1` must both be representable.
pub const MIN_INDEX_BIT_WIDTH: u32 = 2;
