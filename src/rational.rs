//! Exact rational numbers over native 64-bit integers.
//!
//! A `Rational` is always stored in lowest terms with a positive denominator,
//! so two `Rational`s are equal exactly when their fields are equal.
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use crate::error::{RationalError, Result};
use crate::operand::Operand;

/// An exact fraction `numerator/denominator`.
///
/// Invariants, established by every constructor:
/// * `denominator > 0`
/// * `gcd(|numerator|, denominator) == 1`, so zero is always `0/1`
///
/// Cross-multiplication in `add` is not overflow checked.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

impl Rational {
    /// Creates the normalized form of `numerator/denominator`.
    ///
    /// Fails with `RationalError::DivisionByZero` if `denominator` is zero,
    /// and with `RationalError::Value` if the normalized form doesn't fit in
    /// `i64`, as with `1/i64::MIN` or `i64::MIN/-1`.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        if denominator == 0 {
            return Err(RationalError::DivisionByZero);
        }
        if numerator == 0 {
            return Ok(Self::zero());
        }
        let out_of_range = || RationalError::Value(format!("{numerator}/{denominator}"));
        // Only `i64::MIN/i64::MIN` has a gcd of 2^63
        let Ok(g) = i64::try_from(gcd(numerator, denominator)) else {
            return Ok(Self::from_integer(1));
        };
        let (n, d) = (numerator / g, denominator / g);
        if d > 0 {
            return Ok(Rational { numerator: n, denominator: d });
        }
        match (n.checked_neg(), d.checked_neg()) {
            (Some(numerator), Some(denominator)) => Ok(Rational { numerator, denominator }),
            _ => Err(out_of_range()),
        }
    }

    /// Creates `n/1`.
    #[must_use]
    pub const fn from_integer(n: i64) -> Self {
        Rational { numerator: n, denominator: 1 }
    }

    /// `0/1`, the starting point for sums.
    #[must_use]
    pub const fn zero() -> Self {
        Self::from_integer(0)
    }

    /// Returns the numerator, which carries the sign.
    #[must_use]
    pub const fn numerator(self) -> i64 {
        self.numerator
    }

    /// Returns the denominator, which is always positive.
    #[must_use]
    pub const fn denominator(self) -> i64 {
        self.denominator
    }

    /// Adds an integer or another `Rational`. Any other operand fails with
    /// `RationalError::InvalidOperand`.
    #[allow(clippy::should_implement_trait)]
    pub fn add<'a>(self, other: impl Into<Operand<'a>>) -> Result<Self> {
        let other = other.into().scalar("add")?;
        Ok(self + other)
    }

    /// A floating point approximation of the value.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn to_decimal(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    // `denominator` must be positive, so the gcd is at most `denominator`.
    #[allow(clippy::cast_possible_wrap)]
    fn reduced(numerator: i64, denominator: i64) -> Self {
        let g = gcd(numerator, denominator) as i64;
        Rational { numerator: numerator / g, denominator: denominator / g }
    }
}

/// Greatest common divisor of `|a|` and `|b|`; at least 1 when `b != 0`.
fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

/// Always `numerator/denominator`, even for whole numbers: `3/1`, never `3`.
impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Parses `"<int>/<int>"`. Each side may be surrounded by whitespace and may
/// carry a sign.
impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || RationalError::Value(s.to_string());
        let mut parts = s.split('/');
        let (Some(numerator), Some(denominator), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        let numerator = numerator.trim().parse::<i64>().map_err(|_| invalid())?;
        let denominator = denominator.trim().parse::<i64>().map_err(|_| invalid())?;
        Rational::new(numerator, denominator)
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        // Both denominators are positive, so their product is nonzero
        Rational::reduced(
            self.numerator * rhs.denominator + rhs.numerator * self.denominator,
            self.denominator * rhs.denominator,
        )
    }
}

impl Add<i64> for Rational {
    type Output = Self;

    fn add(self, rhs: i64) -> Self {
        self + Rational::from_integer(rhs)
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |total, r| total + r)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(i64::from(n))
    }
}
