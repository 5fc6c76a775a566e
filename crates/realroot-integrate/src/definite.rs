//! Definite integrals of polynomials.

use realroot_poly::{PolyResult, Polynomial};
use tracing::trace;

use crate::gauss_kronrod::{GaussKronrodRule, QuadratureResult};

/// Computes `∫ p(x) dx` over `[lower, upper]` as `F(upper) - F(lower)`.
///
/// # Errors
///
/// [`PolyError::Domain`](realroot_poly::PolyError::Domain) if `p` has an
/// `x^-1` term, whose antiderivative is not a polynomial.
///
/// # Example
///
/// ```
/// use realroot_integrate::definite_integral;
/// use realroot_poly::Polynomial;
///
/// // ∫₋₁² (3x² - 2x + 1) dx = [x³ - x² + x]₋₁² = 6 - (-3)
/// let p = Polynomial::from_coefficients(&[3.0, -2.0, 1.0]);
/// assert_eq!(definite_integral(&p, -1.0, 2.0).unwrap(), 9.0);
/// ```
pub fn definite_integral(p: &Polynomial, lower: f64, upper: f64) -> PolyResult<f64> {
    let antiderivative = p.antiderivative()?;
    Ok(antiderivative.evaluate(upper) - antiderivative.evaluate(lower))
}

/// Approximates `∫ p(x) dx` over `[lower, upper]` with the G7K15 rule.
///
/// For polynomials of degree 22 or less the Kronrod value is exact up to
/// rounding. Negative-exponent terms are integrated as ordinary functions;
/// an interval containing 0 then gives a meaningless result.
#[must_use]
pub fn definite_integral_numerically(p: &Polynomial, lower: f64, upper: f64) -> QuadratureResult {
    let result = GaussKronrodRule::g7k15().integrate(|x| p.evaluate(x), lower, upper);
    trace!(
        degree = p.degree(),
        value = result.value,
        error = result.error,
        "gauss-kronrod quadrature"
    );
    result
}

/// Checks that `antiderivative` differentiates back to `p`, term by term
/// within [`COMPARISON_PRECISION`](realroot_poly::COMPARISON_PRECISION).
#[must_use]
pub fn verify_antiderivative(p: &Polynomial, antiderivative: &Polynomial) -> bool {
    antiderivative.derivative() == *p
}
