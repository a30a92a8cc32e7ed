use midpoint_common::error::BoundedIntError;
use thiserror::Error;

/// Errors related to configuring a search.
#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    // Index arithmetic needs at least the values 0 and 1
    #[error("Index width of {0} bit(s) is too narrow: at least {min} bits are required", min = crate::MIN_INDEX_BIT_WIDTH)]
    IndexWidthTooNarrow(u32),

    #[error("Wrapped BoundedIntError: {0}")]
    BoundedIntError(#[from] BoundedIntError),
}

/// Result type for search functions that can produce errors.
pub type Result<T, E = SearchError> = std::result::Result<T, E>;
