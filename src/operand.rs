//! The `Operand` type is the closed set of values the core operations accept.
//! Plain integers are turned into `Rational`s here, once, so the arithmetic
//! itself only ever sees `Rational`s.
use crate::error::{RationalError, Result};
use crate::rational::Rational;
use crate::sequence::RationalSequence;

/// An argument to `Rational::add` or to one of the `RationalSequence`
/// mutators. Which variants an operation accepts is part of that operation's
/// documentation:
///
/// * `Rational::add`, `RationalSequence::set` and `RationalSequence::append`
///   accept `Int` and `Fraction`;
/// * `RationalSequence::concat` and `RationalSequence::extend_in_place` accept
///   all three.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand<'a> {
    /// A plain integer, equivalent to `Rational(n, 1)`
    Int(i64),
    /// An already normalized fraction
    Fraction(Rational),
    /// Every element of another sequence, in storage order
    Sequence(&'a RationalSequence),
}

impl Operand<'_> {
    /// A short name for the variant, used in error messages
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Int(_) => "integer",
            Operand::Fraction(_) => "rational",
            Operand::Sequence(_) => "sequence",
        }
    }

    /// Resolves a scalar operand to a `Rational`, or reports that `operation`
    /// can't take a sequence.
    pub(crate) fn scalar(self, operation: &'static str) -> Result<Rational> {
        match self {
            Operand::Int(n) => Ok(Rational::from_integer(n)),
            Operand::Fraction(r) => Ok(r),
            Operand::Sequence(_) => {
                Err(RationalError::InvalidOperand { operation, operand: self.kind() })
            }
        }
    }
}

impl From<i64> for Operand<'_> {
    fn from(n: i64) -> Self {
        Operand::Int(n)
    }
}

impl From<i32> for Operand<'_> {
    fn from(n: i32) -> Self {
        Operand::Int(i64::from(n))
    }
}

impl From<Rational> for Operand<'_> {
    fn from(r: Rational) -> Self {
        Operand::Fraction(r)
    }
}

impl From<&Rational> for Operand<'_> {
    fn from(r: &Rational) -> Self {
        Operand::Fraction(*r)
    }
}

impl<'a> From<&'a RationalSequence> for Operand<'a> {
    fn from(s: &'a RationalSequence) -> Self {
        Operand::Sequence(s)
    }
}
