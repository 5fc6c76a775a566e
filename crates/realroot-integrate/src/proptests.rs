//! Property-based tests for definite integration.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use realroot_poly::Polynomial;

    use crate::definite::{definite_integral, definite_integral_numerically};

    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec((-10i32..=10).prop_map(f64::from), 1..=8)
            .prop_map(|coeffs| Polynomial::from_coefficients(&coeffs))
    }

    fn bound() -> impl Strategy<Value = f64> {
        (-20i32..=20).prop_map(|n| f64::from(n) / 4.0)
    }

    proptest! {
        #[test]
        fn quadrature_agrees_with_antiderivative(p in small_poly(), a in bound(), b in bound()) {
            let exact = definite_integral(&p, a, b).unwrap();
            let numeric = definite_integral_numerically(&p, a, b);
            prop_assert!((numeric.value - exact).abs() <= 1e-6 * (1.0 + exact.abs()));
        }

        #[test]
        fn intervals_are_additive(p in small_poly(), a in bound(), b in bound(), c in bound()) {
            let whole = definite_integral(&p, a, c).unwrap();
            let split =
                definite_integral(&p, a, b).unwrap() + definite_integral(&p, b, c).unwrap();
            prop_assert!((whole - split).abs() <= 1e-6 * (1.0 + whole.abs()));
        }
    }
}
