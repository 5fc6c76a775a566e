//! Closed-form solutions for degree 1 and 2.

use realroot_poly::Polynomial;

use crate::error::{SolveError, SolveResult};

/// Solves `a·x + b = 0`.
///
/// # Errors
///
/// [`SolveError::InvalidDegree`] unless `p` is exactly `a·x^1 + b·x^0`.
pub fn find_zero_of_linear_term(p: &Polynomial) -> SolveResult<f64> {
    match p.terms() {
        [a, b] if a.exponent == 1 && b.exponent == 0 && !a.is_zero() => {
            Ok(-b.coefficient / a.coefficient)
        }
        _ => Err(SolveError::InvalidDegree {
            expected: 1,
            found: p.degree(),
        }),
    }
}

/// Solves `a·x² + b·x + c = 0` over the reals.
///
/// The polynomial is made monic, `x² + p·x + q`, and the roots are
/// `−p/2 ± √(p²/4 − q)`, returned with the `+` root first. A double root is
/// returned twice.
///
/// # Errors
///
/// - [`SolveError::InvalidDegree`] unless `p` is exactly
///   `a·x^2 + b·x^1 + c·x^0` with `a ≠ 0`.
/// - [`SolveError::ComplexRootsUnsupported`] if the discriminant is negative.
pub fn find_zeros_of_quadratic_terms(p: &Polynomial) -> SolveResult<(f64, f64)> {
    let leading = match p.terms() {
        [a, b, c] if a.exponent == 2 && b.exponent == 1 && c.exponent == 0 && !a.is_zero() => {
            a.coefficient
        }
        _ => {
            return Err(SolveError::InvalidDegree {
                expected: 2,
                found: p.degree(),
            })
        }
    };

    let monic = p.div_scalar(leading)?;
    let linear = monic.coefficient(1)?;
    let constant = monic.coefficient(0)?;

    let discriminant = linear * linear / 4.0 - constant;
    if discriminant < 0.0 {
        return Err(SolveError::ComplexRootsUnsupported { discriminant });
    }

    let root = discriminant.sqrt();
    Ok((-linear / 2.0 + root, -linear / 2.0 - root))
}
