use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    // Bounded integers have no fractional representation
    #[error("BoundedInt does not support true (fractional) division")]
    UnsupportedTrueDivision,

    // Integer division or modulo with a zero divisor
    #[error("Division by zero: {dividend} / 0")]
    DivisionByZero { dividend: i128 },
}
