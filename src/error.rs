//! The error kinds reported by the `Rational` and `RationalSequence` types.
use thiserror::Error;

/// Everything that can go wrong inside the core types. Each failing call
/// leaves existing values untouched.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RationalError {
    /// A zero denominator was given when constructing a `Rational`
    #[error("Denominator cannot be zero")]
    DivisionByZero,

    /// Text that is not an integer, or not an `<int>/<int>` fraction
    #[error("Invalid rational literal: {0:?}")]
    Value(String),

    /// An operand variant the operation doesn't accept
    #[error("{operation} doesn't accept {operand} operands")]
    InvalidOperand {
        /// The operation that rejected the operand
        operation: &'static str,
        /// The kind of operand that was rejected
        operand: &'static str,
    },

    /// Positional access past the end of a sequence
    #[error("Index {index} out of range for sequence of length {len}")]
    Index {
        /// The requested position
        index: usize,
        /// The sequence's length at the time of the request
        len: usize,
    },
}

/// Result type for the core operations.
pub type Result<T> = std::result::Result<T, RationalError>;
