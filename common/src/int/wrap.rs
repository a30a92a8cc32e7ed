/// Largest value representable in `bit_width` signed bits, `2^(bit_width-1) - 1`.
#[inline]
pub const fn max_value(bit_width: u32) -> i128 {
    (1i128 << (bit_width - 1)) - 1
}

/// Smallest value representable in `bit_width` signed bits, `-2^(bit_width-1)`.
#[inline]
pub const fn min_value(bit_width: u32) -> i128 {
    -max_value(bit_width) - 1
}

/// Remap `value` into `[min_value, max_value]` the way two's-complement hardware would.
///
/// Computes `((value + max + 1) mod 2(max + 1)) - max - 1` with a non-negative modulus.
/// The reduction runs for every input, in range or not; for in-range values it is the
/// identity. The input is reduced once before the offset is added so that values near
/// `i128::MAX` cannot overflow.
///
/// `bit_width` must be in `1..=MAX_BIT_WIDTH`, which the callers in this crate guarantee.
#[inline]
pub const fn wrap(value: i128, bit_width: u32) -> i128 {
    let half = max_value(bit_width) + 1;
    let modulus = 2 * half;
    (value.rem_euclid(modulus) + half).rem_euclid(modulus) - half
}

/// Division rounding toward negative infinity. `rhs` must be non-zero.
#[inline]
pub(crate) const fn floor_div(lhs: i128, rhs: i128) -> i128 {
    let (q, r) = (lhs / rhs, lhs % rhs);
    if r != 0 && ((r < 0) != (rhs < 0)) {
        q - 1
    } else {
        q
    }
}

/// Remainder matching [`floor_div`]: takes the sign of `rhs`. `rhs` must be non-zero.
#[inline]
pub(crate) const fn floor_mod(lhs: i128, rhs: i128) -> i128 {
    let r = lhs % rhs;
    if r != 0 && ((r < 0) != (rhs < 0)) {
        r + rhs
    } else {
        r
    }
}
