use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoundedIntError {
    // Only integers (or other bounded integers) can initialise a BoundedInt
    #[error("Only an integer or a BoundedInt can initialise a BoundedInt, got \"{0}\"")]
    NotAnInteger(String),

    // Width must leave room for the sign bit and fit the exact-arithmetic domain
    #[error("Invalid bit width {0}: expected a value in 1..={max}", max = crate::int::MAX_BIT_WIDTH)]
    InvalidBitWidth(u32),
}
