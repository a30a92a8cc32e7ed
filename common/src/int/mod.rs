//! Fixed-width signed integers with two's-complement wraparound.
//!
//! [`BoundedInt`] models a machine integer of an arbitrary, runtime-chosen width between
//! 1 and 64 bits. Every operation computes the exact result on the underlying integers and
//! then re-wraps it into the representable range, so overflow is silent and deterministic,
//! exactly as on hardware.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, BitAnd, BitOr, BitXor, Mul, Not, Sub},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::{ArithmeticError, BoundedIntError};

mod wrap;

use wrap::{floor_div, floor_mod};
pub use wrap::{max_value, min_value, wrap};

/// Width used when none is given.
pub const DEFAULT_BIT_WIDTH: u32 = 8;

/// Widest supported integer. Keeps every exact intermediate result inside `i128`.
pub const MAX_BIT_WIDTH: u32 = 64;

/// A signed integer stored in `bit_width` bits.
///
/// The stored value is always canonical, i.e. inside `[min_value, max_value]`. Equality and
/// ordering look at the value only, never at the width.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawBoundedInt", into = "RawBoundedInt")]
pub struct BoundedInt {
    value: i64,
    bit_width: u32,
}

#[derive(Serialize, Deserialize)]
struct RawBoundedInt {
    value: i64,
    bit_width: u32,
}

impl TryFrom<RawBoundedInt> for BoundedInt {
    type Error = BoundedIntError;

    fn try_from(raw: RawBoundedInt) -> Result<Self, Self::Error> {
        BoundedInt::new(raw.value as i128, raw.bit_width)
    }
}

impl From<BoundedInt> for RawBoundedInt {
    fn from(int: BoundedInt) -> Self {
        RawBoundedInt { value: int.value, bit_width: int.bit_width }
    }
}

impl BoundedInt {
    /// Construct from a raw integer, wrapping it into `bit_width` bits.
    pub fn new(value: i128, bit_width: u32) -> Result<Self, BoundedIntError> {
        if !(1..=MAX_BIT_WIDTH).contains(&bit_width) {
            return Err(BoundedIntError::InvalidBitWidth(bit_width));
        }
        Ok(Self::wrapped(value, bit_width))
    }

    /// Construct at [`DEFAULT_BIT_WIDTH`].
    pub fn with_default_width(value: i128) -> Self {
        Self::wrapped(value, DEFAULT_BIT_WIDTH)
    }

    /// Re-interpret another bounded integer in `bit_width` bits.
    pub fn rewrap(other: BoundedInt, bit_width: u32) -> Result<Self, BoundedIntError> {
        Self::new(other.into(), bit_width)
    }

    /// Parse a decimal integer literal and wrap it into `bit_width` bits.
    pub fn parse(s: &str, bit_width: u32) -> Result<Self, BoundedIntError> {
        let value = s
            .trim()
            .parse::<i128>()
            .map_err(|_| BoundedIntError::NotAnInteger(s.to_owned()))?;
        Self::new(value, bit_width)
    }

    // `bit_width` has already been validated.
    #[inline]
    fn wrapped(value: i128, bit_width: u32) -> Self {
        BoundedInt {
            value: wrap(value, bit_width) as i64,
            bit_width,
        }
    }

    /// Construct a value in this integer's width.
    #[inline]
    pub fn with_value(&self, raw: i128) -> Self {
        Self::wrapped(raw, self.bit_width)
    }

    /// Right-hand operands are converted into the left-hand width before use.
    #[inline]
    fn operand(&self, rhs: BoundedInt) -> i128 {
        wrap(rhs.value as i128, self.bit_width)
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn bit_width(&self) -> u32 {
        self.bit_width
    }

    pub fn max_value(&self) -> i64 {
        max_value(self.bit_width) as i64
    }

    pub fn min_value(&self) -> i64 {
        min_value(self.bit_width) as i64
    }

    /// The value as a slice index, if it is non-negative.
    pub fn to_index(&self) -> Option<usize> {
        usize::try_from(self.value).ok()
    }

    pub fn add(&self, rhs: BoundedInt) -> Self {
        self.with_value(self.value as i128 + self.operand(rhs))
    }

    pub fn subtract(&self, rhs: BoundedInt) -> Self {
        self.with_value(self.value as i128 - self.operand(rhs))
    }

    pub fn multiply(&self, rhs: BoundedInt) -> Self {
        self.with_value(self.value as i128 * self.operand(rhs))
    }

    /// Integer division, rounding toward negative infinity.
    pub fn divide(&self, rhs: BoundedInt) -> Result<Self, ArithmeticError> {
        let divisor = self.nonzero_operand(rhs)?;
        Ok(self.with_value(floor_div(self.value as i128, divisor)))
    }

    /// Remainder of [`BoundedInt::divide`]; takes the sign of the divisor.
    pub fn modulo(&self, rhs: BoundedInt) -> Result<Self, ArithmeticError> {
        let divisor = self.nonzero_operand(rhs)?;
        Ok(self.with_value(floor_mod(self.value as i128, divisor)))
    }

    /// Floor division by two.
    ///
    /// Unlike `divide`, the divisor does not have to be representable in this width.
    pub fn halve(&self) -> Self {
        self.with_value(floor_div(self.value as i128, 2))
    }

    /// Fractional division is not representable and always fails, whatever the operands.
    pub fn true_divide(&self, _rhs: BoundedInt) -> Result<f64, ArithmeticError> {
        Err(ArithmeticError::UnsupportedTrueDivision)
    }

    fn nonzero_operand(&self, rhs: BoundedInt) -> Result<i128, ArithmeticError> {
        match self.operand(rhs) {
            0 => Err(ArithmeticError::DivisionByZero { dividend: self.value as i128 }),
            divisor => Ok(divisor),
        }
    }

    pub fn compare_to(&self, rhs: &BoundedInt) -> Ordering {
        self.value.cmp(&rhs.value)
    }

    pub fn bit_and(&self, rhs: BoundedInt) -> Self {
        self.with_value(self.value as i128 & self.operand(rhs))
    }

    pub fn bit_or(&self, rhs: BoundedInt) -> Self {
        self.with_value(self.value as i128 | self.operand(rhs))
    }

    pub fn bit_xor(&self, rhs: BoundedInt) -> Self {
        self.with_value(self.value as i128 ^ self.operand(rhs))
    }

    pub fn bit_not(&self) -> Self {
        self.with_value(!(self.value as i128))
    }
}

impl Default for BoundedInt {
    fn default() -> Self {
        Self::with_default_width(0)
    }
}

impl FromStr for BoundedInt {
    type Err = BoundedIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, DEFAULT_BIT_WIDTH)
    }
}

impl From<BoundedInt> for i128 {
    fn from(int: BoundedInt) -> Self {
        int.value as i128
    }
}

impl From<BoundedInt> for i64 {
    fn from(int: BoundedInt) -> Self {
        int.value
    }
}

impl fmt::Display for BoundedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl PartialEq for BoundedInt {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for BoundedInt {}

impl PartialEq<i64> for BoundedInt {
    fn eq(&self, other: &i64) -> bool {
        self.value == *other
    }
}

impl PartialOrd for BoundedInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BoundedInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}

impl PartialOrd<i64> for BoundedInt {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.value.cmp(other))
    }
}

impl Hash for BoundedInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

macro_rules! impl_wrapping_op {
    ($trait:ident::$method:ident => $inherent:ident) => {
        impl $trait for BoundedInt {
            type Output = BoundedInt;

            #[inline]
            fn $method(self, rhs: BoundedInt) -> BoundedInt {
                BoundedInt::$inherent(&self, rhs)
            }
        }
    };
}

impl_wrapping_op!(Add::add => add);
impl_wrapping_op!(Sub::sub => subtract);
impl_wrapping_op!(Mul::mul => multiply);
impl_wrapping_op!(BitAnd::bitand => bit_and);
impl_wrapping_op!(BitOr::bitor => bit_or);
impl_wrapping_op!(BitXor::bitxor => bit_xor);

impl Not for BoundedInt {
    type Output = BoundedInt;

    #[inline]
    fn not(self) -> BoundedInt {
        self.bit_not()
    }
}
