//! Finding every real zero by repeated deflation.
//!
//! While the working polynomial has degree 3 or more, a bracket scan picks a
//! starting guess, Halley's method refines it, and the linear factor
//! `(x - root)` is divided out by Horner deflation. The remaining quadratic
//! or linear polynomial is solved in closed form.
//!
//! A root is kept even when its deflation leaves a nonzero remainder; the
//! remainder is reported alongside it by [`find_all_real_zeros_detailed`].

use realroot_poly::Polynomial;
use tracing::debug;

use crate::bracket::scan_for_sign_change_with_config;
use crate::closed_form::{find_zero_of_linear_term, find_zeros_of_quadratic_terms};
use crate::config::RootFinderConfig;
use crate::error::{SolveError, SolveResult};
use crate::halley::approximate_zero_by_halleys_method_with_config;

/// A located zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZeroEstimate {
    /// The zero.
    pub value: f64,
    /// Remainder left when `(x - value)` was divided out. Zero for roots
    /// taken from the closed forms.
    pub deflation_remainder: f64,
}

impl ZeroEstimate {
    /// Returns true if dividing out this zero left no remainder.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_exact(&self) -> bool {
        self.deflation_remainder == 0.0
    }

    fn closed_form(value: f64) -> Self {
        Self {
            value,
            deflation_remainder: 0.0,
        }
    }
}

/// Result of dividing a polynomial by `(x - root)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Deflation {
    /// The quotient, one degree lower.
    pub quotient: Polynomial,
    /// The scalar remainder, equal to `f(root)` up to rounding.
    pub remainder: f64,
}

/// Divides `function` by `(x - root)` with Horner's scheme.
///
/// Terms with negative exponents are ignored.
#[must_use]
pub fn deflate(function: &Polynomial, root: f64) -> Deflation {
    let mut row: Vec<f64> = Vec::with_capacity(function.term_count());
    let mut carry = 0.0;
    for c in function.coefficients() {
        carry = carry * root + c;
        row.push(carry);
    }
    let remainder = row.pop().unwrap_or(0.0);

    Deflation {
        quotient: Polynomial::from_coefficients(&row),
        remainder,
    }
}

/// Finds the real zeros of `function` with the default parameters.
///
/// Zeros come out in the order they were found: the ones located by the
/// bracket scan first, then the closed-form ones.
///
/// # Errors
///
/// See [`find_all_real_zeros_detailed`].
pub fn find_all_real_zeros(function: &Polynomial) -> SolveResult<Vec<f64>> {
    find_all_real_zeros_with_config(function, &RootFinderConfig::default())
}

/// Finds the real zeros of `function`.
///
/// # Errors
///
/// See [`find_all_real_zeros_detailed`].
pub fn find_all_real_zeros_with_config(
    function: &Polynomial,
    config: &RootFinderConfig,
) -> SolveResult<Vec<f64>> {
    let zeros = find_all_real_zeros_detailed(function, config)?;
    Ok(zeros.into_iter().map(|z| z.value).collect())
}

/// Finds the real zeros of `function`, reporting each deflation remainder.
///
/// A constant (including zero) polynomial has no zeros to report.
///
/// # Errors
///
/// - [`SolveError::NegativeExponent`] if `function` has a negative-exponent
///   tail.
/// - [`SolveError::NoZeroFoundInBracket`] if a scan pass finds no sign
///   change.
/// - [`SolveError::ComplexRootsUnsupported`] if the final quadratic has no
///   real roots.
#[allow(clippy::float_cmp)]
pub fn find_all_real_zeros_detailed(
    function: &Polynomial,
    config: &RootFinderConfig,
) -> SolveResult<Vec<ZeroEstimate>> {
    let lowest = function.lowest_exponent();
    if lowest < 0 {
        return Err(SolveError::NegativeExponent { exponent: lowest });
    }

    let mut working = function.clone();
    let mut zeros = Vec::with_capacity(function.term_count());

    while working.degree() >= 3 {
        let guess = scan_for_sign_change_with_config(&working, config)?;
        let value = approximate_zero_by_halleys_method_with_config(&working, guess, config);
        let Deflation {
            quotient,
            remainder,
        } = deflate(&working, value);

        if remainder != 0.0 {
            debug!(value, remainder, "keeping zero with inexact deflation");
        }
        zeros.push(ZeroEstimate {
            value,
            deflation_remainder: remainder,
        });
        working = quotient;
    }

    match working.degree() {
        2 => {
            let (first, second) = find_zeros_of_quadratic_terms(&working)?;
            zeros.push(ZeroEstimate::closed_form(first));
            zeros.push(ZeroEstimate::closed_form(second));
        }
        1 => zeros.push(ZeroEstimate::closed_form(find_zero_of_linear_term(&working)?)),
        _ => {}
    }

    debug!(degree = function.degree(), found = zeros.len(), "root finding finished");
    Ok(zeros)
}
