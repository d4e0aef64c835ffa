//! Property-based tests for `Rational` arithmetic and `RationalSequence` order.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{sequence::descending, Rational, RationalError, RationalSequence};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    // Any mix of these sums within i64: the lcm of 1..=12 is 27720
    fn summable_rational() -> impl Strategy<Value = Rational> {
        (small_int(), 1i64..=12i64).prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    fn gcd(mut a: i64, mut b: i64) -> i64 {
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a.abs()
    }

    proptest! {
        #[test]
        fn construction_normalizes(n in small_int(), d in non_zero_int()) {
            let r = Rational::new(n, d).unwrap();
            prop_assert!(r.denominator() > 0);
            prop_assert_eq!(gcd(r.numerator(), r.denominator()), 1);
            // Same value as the input: n/d == rn/rd
            prop_assert_eq!(n * r.denominator(), r.numerator() * d);
        }

        #[test]
        fn zero_numerator_is_zero_over_one(d in non_zero_int()) {
            let r = Rational::new(0, d).unwrap();
            prop_assert_eq!((r.numerator(), r.denominator()), (0, 1));
        }

        #[test]
        fn zero_denominator_always_fails(n in any::<i64>()) {
            prop_assert_eq!(Rational::new(n, 0), Err(RationalError::DivisionByZero));
        }

        #[test]
        fn add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a.add(b).unwrap(), b.add(a).unwrap());
        }

        #[test]
        fn add_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                a.add(b).unwrap().add(c).unwrap(),
                a.add(b.add(c).unwrap()).unwrap()
            );
        }

        #[test]
        fn add_integer_is_add_whole_rational(a in rational(), n in small_int()) {
            prop_assert_eq!(a.add(n).unwrap(), a + Rational::from_integer(n));
        }

        #[test]
        fn string_round_trip_gives_normalized_form(n in small_int(), d in non_zero_int()) {
            let g = gcd(n, d);
            let (mut rn, mut rd) = (n / g, d / g);
            if rd < 0 {
                rn = -rn;
                rd = -rd;
            }
            let parsed: Rational = format!("{n}/{d}").parse().unwrap();
            prop_assert_eq!(parsed.to_string(), format!("{rn}/{rd}"));
        }

        #[test]
        fn iteration_is_sorted_permutation(values in prop::collection::vec(summable_rational(), 0..8)) {
            let s: RationalSequence = values.iter().copied().collect();
            let sorted: Vec<Rational> = s.iter().collect();
            prop_assert_eq!(sorted.len(), values.len());
            for pair in sorted.windows(2) {
                prop_assert!(descending(&pair[0], &pair[1]).is_le());
            }
            prop_assert_eq!(s.as_slice(), &values[..]);
            prop_assert_eq!(sorted.iter().sum::<Rational>(), s.sum());
        }
    }
}
