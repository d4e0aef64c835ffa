//! Provides `RationalSequence`, a growable list of `Rational`s that keeps
//! insertion order for storage but iterates in descending composite order.
use std::cmp::Ordering;
use std::iter::FusedIterator;

use crate::error::{RationalError, Result};
use crate::operand::Operand;
use crate::rational::Rational;

/// An ordered collection of `Rational` values.
///
/// * Storage order is insertion order, visible through `as_slice` and `get`.
/// * Iteration (`iter`, or `for r in &seq`) visits the values sorted by
///   denominator descending, then numerator descending; equal values keep
///   their relative storage order.
/// * Integers are converted to `n/1` before they're stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RationalSequence {
    items: Vec<Rational>,
}

impl RationalSequence {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        RationalSequence { items: Vec::new() }
    }

    /// The number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Is the sequence empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The values in storage (insertion) order.
    #[must_use]
    pub fn as_slice(&self) -> &[Rational] {
        &self.items
    }

    /// Returns the value stored at `index`.
    pub fn get(&self, index: usize) -> Result<Rational> {
        self.items.get(index).copied().ok_or(RationalError::Index { index, len: self.len() })
    }

    /// Replaces the value stored at `index` with an integer or `Rational`.
    pub fn set<'a>(&mut self, index: usize, value: impl Into<Operand<'a>>) -> Result<()> {
        let value = value.into().scalar("set")?;
        let len = self.len();
        let slot = self.items.get_mut(index).ok_or(RationalError::Index { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Pushes an integer or `Rational` onto the end of the sequence.
    pub fn append<'a>(&mut self, value: impl Into<Operand<'a>>) -> Result<()> {
        let value = value.into().scalar("append")?;
        self.items.push(value);
        Ok(())
    }

    /// Returns a new sequence holding this sequence's values followed by
    /// `other`: all of its values if it's a sequence, or the value itself if
    /// it's an integer or `Rational`. Neither input changes.
    pub fn concat<'a>(&self, other: impl Into<Operand<'a>>) -> Result<RationalSequence> {
        let mut result = self.clone();
        result.push_operand(other.into());
        Ok(result)
    }

    /// Like `concat`, but appends to `self` and returns it for chaining.
    pub fn extend_in_place<'a>(&mut self, other: impl Into<Operand<'a>>) -> Result<&mut Self> {
        self.push_operand(other.into());
        Ok(self)
    }

    /// All three operand variants are acceptable here, so this can't fail.
    fn push_operand(&mut self, other: Operand) {
        match other {
            Operand::Int(n) => self.items.push(Rational::from_integer(n)),
            Operand::Fraction(r) => self.items.push(r),
            Operand::Sequence(s) => self.items.extend_from_slice(&s.items),
        }
    }

    /// The exact sum of the values, folded left to right from `0/1`.
    #[must_use]
    pub fn sum(&self) -> Rational {
        self.items.iter().sum()
    }

    /// Iterates over a sorted snapshot of the values; see `descending`.
    /// Call it again to start over.
    #[must_use]
    pub fn iter(&self) -> Descending {
        Descending::of(&self.items)
    }
}

/// The iteration order: larger denominators first, and among equal
/// denominators, larger numerators first.
#[must_use]
pub fn descending(a: &Rational, b: &Rational) -> Ordering {
    b.denominator().cmp(&a.denominator()).then_with(|| b.numerator().cmp(&a.numerator()))
}

/// Iterator returned by `RationalSequence::iter`. It owns its snapshot, so the
/// sequence can be modified while a `Descending` is alive.
#[derive(Clone, Debug)]
pub struct Descending {
    sorted: std::vec::IntoIter<Rational>,
}

impl Descending {
    fn of(items: &[Rational]) -> Self {
        let mut snapshot = items.to_vec();
        // `sort_by` is stable, so equal values keep storage order
        snapshot.sort_by(descending);
        Descending { sorted: snapshot.into_iter() }
    }
}

impl Iterator for Descending {
    type Item = Rational;

    fn next(&mut self) -> Option<Rational> {
        self.sorted.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sorted.size_hint()
    }
}

impl ExactSizeIterator for Descending {}
impl FusedIterator for Descending {}

impl<'a> IntoIterator for &'a RationalSequence {
    type Item = Rational;
    type IntoIter = Descending;

    fn into_iter(self) -> Descending {
        self.iter()
    }
}

impl FromIterator<Rational> for RationalSequence {
    fn from_iter<I: IntoIterator<Item = Rational>>(iter: I) -> Self {
        RationalSequence { items: iter.into_iter().collect() }
    }
}

impl Extend<Rational> for RationalSequence {
    fn extend<I: IntoIterator<Item = Rational>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    fn r(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    fn seq(values: &[(i64, i64)]) -> RationalSequence {
        values.iter().map(|&(n, d)| r(n, d)).collect()
    }

    fn rendered(values: impl IntoIterator<Item = Rational>) -> Vec<String> {
        values.into_iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn sum_of_unit_fractions_is_one() {
        let s = seq(&[(1, 2), (1, 3), (1, 6)]);
        assert_eq!(s.sum(), Rational::from(1));
        assert_eq!(RationalSequence::new().sum(), Rational::zero());
    }

    #[test]
    fn iteration_is_descending_and_leaves_storage_alone() {
        let s = seq(&[(1, 2), (1, 3), (2, 3)]);
        assert_eq!(rendered(s.iter()), ["2/3", "1/3", "1/2"]);
        assert_eq!(rendered(s.as_slice().iter().copied()), ["1/2", "1/3", "2/3"]);
        // Restartable
        assert_eq!(rendered(&s), ["2/3", "1/3", "1/2"]);
        assert_eq!(s.iter().len(), 3);
    }

    #[test]
    fn negative_numerators_sort_last_within_a_denominator() {
        let s = seq(&[(-1, 4), (3, 4), (5, 1), (1, 4)]);
        assert_eq!(rendered(&s), ["3/4", "1/4", "-1/4", "5/1"]);
    }

    #[test]
    fn ties_keep_storage_order() {
        let s = seq(&[(1, 2), (2, 4), (3, 6)]);
        let sorted: Vec<_> = s.iter().collect();
        assert_eq!(sorted, s.as_slice());
    }

    #[test]
    fn append_coerces_integers() {
        let mut s = RationalSequence::new();
        s.append(r(1, 2)).unwrap();
        s.append(5).unwrap();
        let last = s.get(s.len() - 1).unwrap();
        assert_eq!((last.numerator(), last.denominator()), (5, 1));
    }

    #[test]
    fn append_and_set_reject_sequences() {
        let other = seq(&[(1, 2)]);
        let mut s = seq(&[(1, 3)]);
        assert_eq!(
            s.append(&other),
            Err(RationalError::InvalidOperand { operation: "append", operand: "sequence" })
        );
        assert_eq!(
            s.set(0, &other),
            Err(RationalError::InvalidOperand { operation: "set", operand: "sequence" })
        );
        assert_eq!(s, seq(&[(1, 3)]));
    }

    #[test]
    fn get_and_set_by_position() {
        let mut s = seq(&[(1, 2), (1, 3)]);
        s.set(1, 7).unwrap();
        assert_eq!(s.get(1), Ok(Rational::from(7)));
        s.set(0, r(2, 8)).unwrap();
        assert_eq!(s.get(0), Ok(r(1, 4)));
    }

    #[test]
    fn out_of_range_positions_are_index_errors() {
        let mut s = seq(&[(1, 2)]);
        assert_eq!(s.get(1), Err(RationalError::Index { index: 1, len: 1 }));
        assert_eq!(s.set(3, 1), Err(RationalError::Index { index: 3, len: 1 }));
        assert_eq!(s, seq(&[(1, 2)]));
    }

    #[test]
    fn concat_leaves_both_inputs_unchanged() {
        let a = seq(&[(1, 2), (1, 3)]);
        let b = seq(&[(1, 5)]);
        let c = a.concat(&b).unwrap();
        assert_eq!(c.len(), a.len() + b.len());
        assert_eq!(rendered(c.as_slice().iter().copied()), ["1/2", "1/3", "1/5"]);
        assert_eq!(a, seq(&[(1, 2), (1, 3)]));
        assert_eq!(b, seq(&[(1, 5)]));

        let d = a.concat(4).unwrap();
        assert_eq!(d.len(), a.len() + 1);
        assert_eq!(d.get(2), Ok(Rational::from(4)));
        let e = a.concat(r(3, 9)).unwrap();
        assert_eq!(e.get(2), Ok(r(1, 3)));
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn extend_in_place_mutates_and_chains() {
        let mut a = seq(&[(1, 2)]);
        let b = seq(&[(1, 3), (1, 4)]);
        a.extend_in_place(&b).unwrap().extend_in_place(2).unwrap();
        assert_eq!(rendered(a.as_slice().iter().copied()), ["1/2", "1/3", "1/4", "2/1"]);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn extend_from_an_iterator() {
        let mut a = RationalSequence::new();
        a.extend([r(1, 2), r(1, 2)]);
        assert_eq!(a.sum(), Rational::from(1));
    }
}
