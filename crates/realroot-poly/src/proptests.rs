//! Property-based tests for normalization, arithmetic and division.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::normalize::combine_like_terms;
    use crate::polynomial::Polynomial;
    use crate::term::Term;

    // Small integer coefficients keep every product and quotient exact
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-20i32..=20).prop_map(f64::from)
    }

    // Dense polynomials of degree 0-5
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_coeff(), 1..=6)
            .prop_map(|coeffs| Polynomial::from_coefficients(&coeffs))
    }

    fn nonzero_poly() -> impl Strategy<Value = Polynomial> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    // Monic divisors of degree 1-3
    fn monic_divisor() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_coeff(), 1..=3).prop_map(|tail| {
            let mut coeffs = vec![1.0];
            coeffs.extend(tail);
            Polynomial::from_coefficients(&coeffs)
        })
    }

    // Unordered term lists with repeated exponents
    fn term_soup() -> impl Strategy<Value = Vec<Term>> {
        proptest::collection::vec(
            (small_coeff(), 0i32..6).prop_map(|(c, e)| Term::new(c, e)),
            0..12,
        )
    }

    proptest! {
        // Normalization

        #[test]
        fn normalization_is_idempotent(terms in term_soup()) {
            let once = combine_like_terms(&terms);
            let twice = combine_like_terms(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn normalized_terms_are_dense_and_descending(terms in term_soup()) {
            let normalized = combine_like_terms(&terms);
            let degree = normalized[0].exponent;
            prop_assert_eq!(normalized.len(), usize::try_from(degree + 1).unwrap());
            for (i, term) in normalized.iter().enumerate() {
                prop_assert_eq!(term.exponent, degree - i32::try_from(i).unwrap());
            }
            if normalized.len() > 1 {
                prop_assert!(normalized[0].coefficient != 0.0);
            }
        }

        // Ring axioms

        #[test]
        fn add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = &a * &(&b + &c);
            let right = &(&a * &b) + &(&a * &c);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn sub_self_is_zero(a in small_poly()) {
            prop_assert!((&a - &a).is_zero());
        }

        #[test]
        fn mul_degree_adds(a in nonzero_poly(), b in nonzero_poly()) {
            prop_assert_eq!((&a * &b).degree(), a.degree() + b.degree());
        }

        // Calculus

        #[test]
        fn derivative_of_antiderivative(a in small_poly()) {
            let round_trip = a.antiderivative().unwrap().derivative();
            prop_assert!(round_trip.approx_eq(&a, 1e-12));
        }

        // Scalars

        #[test]
        fn scalar_mul_then_div(a in small_poly(), c in small_coeff()) {
            prop_assume!(c != 0.0);
            let back = (&a * c).div_scalar(c).unwrap();
            prop_assert!(back.approx_eq(&a, 1e-10));
        }

        // Division

        #[test]
        fn exact_division_recovers_factor(q in nonzero_poly(), d in monic_divisor()) {
            let p = &q * &d;
            let division = p.long_div(&d).unwrap();
            prop_assert_eq!(division.quotient(), &q);
            prop_assert!(division.is_exact());
        }

        #[test]
        fn division_reconstructs_numerator(p in small_poly(), d in monic_divisor()) {
            prop_assume!(d.degree() <= p.degree());
            let division = p.long_div(&d).unwrap();
            let back = &(division.quotient() * &d) + division.remainder();
            prop_assert!(back.approx_eq(&p, 1e-9));
            prop_assert!(division.is_exact() || division.remainder_degree() < d.degree());
        }

        // Evaluation

        #[test]
        fn horner_matches_power_sum(a in small_poly(), x in -3.0f64..3.0) {
            let direct: f64 = a
                .iter()
                .map(|t| t.coefficient * x.powi(t.exponent))
                .sum();
            prop_assert!((a.evaluate(x) - direct).abs() <= 1e-9 * (1.0 + direct.abs()));
        }
    }
}
