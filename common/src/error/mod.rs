mod arithmetic;
mod construction;

pub use arithmetic::ArithmeticError;
pub use construction::BoundedIntError;
