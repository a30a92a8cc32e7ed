//! Shared value types for the midpoint-overflow workspace.

pub mod error;
pub mod int;

pub use int::{BoundedInt, DEFAULT_BIT_WIDTH, MAX_BIT_WIDTH};
