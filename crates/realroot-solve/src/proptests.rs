//! Property-based tests for the root finders.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use realroot_poly::Polynomial;

    use crate::closed_form::find_zeros_of_quadratic_terms;
    use crate::zeros::{deflate, find_all_real_zeros};

    // Distinct integer roots well inside the default bracket
    fn distinct_roots() -> impl Strategy<Value = Vec<i32>> {
        proptest::sample::subsequence((-9..=9).collect::<Vec<i32>>(), 3..=5)
    }

    fn from_roots(roots: &[i32]) -> Polynomial {
        roots
            .iter()
            .map(|&r| Polynomial::from_coefficients(&[1.0, -f64::from(r)]))
            .fold(Polynomial::constant(1.0), |acc, factor| &acc * &factor)
    }

    proptest! {
        #[test]
        fn finds_every_distinct_root(roots in distinct_roots()) {
            let p = from_roots(&roots);
            let mut zeros = find_all_real_zeros(&p).unwrap();
            zeros.sort_by(f64::total_cmp);

            prop_assert_eq!(zeros.len(), roots.len());
            for (found, expected) in zeros.iter().zip(&roots) {
                prop_assert!((found - f64::from(*expected)).abs() < 1e-8);
            }
        }

        #[test]
        fn deflating_a_root_is_exact(roots in distinct_roots()) {
            let p = from_roots(&roots);
            let deflation = deflate(&p, f64::from(roots[0]));
            prop_assert_eq!(deflation.remainder, 0.0);
            prop_assert_eq!(deflation.quotient, from_roots(&roots[1..]));
        }

        #[test]
        fn quadratic_roots_satisfy_vieta(a in -9i32..=9, b in -9i32..=9, lead in 1i32..=4) {
            // lead·(x - a)(x - b)
            let p = from_roots(&[a, b]).scale(f64::from(lead));
            let (first, second) = find_zeros_of_quadratic_terms(&p).unwrap();
            prop_assert!((first + second - f64::from(a + b)).abs() < 1e-9);
            prop_assert!((first * second - f64::from(a * b)).abs() < 1e-9);
        }
    }
}
