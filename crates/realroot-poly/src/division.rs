//! Polynomial long division.
//!
//! Division works directly on the dense term lists. A sliding window over
//! the numerator is reduced one quotient term at a time; numerator terms are
//! pulled down into the window as the subtraction front moves right. The
//! divisor is not assumed monic, so quotient coefficients may be fractional
//! even for integer inputs.
//!
//! The result is a [`Division`]: quotient and remainder as two separate
//! polynomials.

use std::ops::Mul;

use tracing::trace;

use crate::arithmetic::convolve;
use crate::error::{PolyError, PolyResult};
use crate::polynomial::Polynomial;
use crate::term::Term;

/// Quotient and remainder of a polynomial long division.
///
/// `numerator = quotient · denominator + remainder`, with the remainder's
/// degree below the denominator's (or the remainder equal to zero).
#[derive(Clone, Debug, PartialEq)]
pub struct Division {
    quotient: Polynomial,
    remainder: Polynomial,
}

impl Division {
    /// Pairs a quotient with a remainder.
    #[must_use]
    pub fn new(quotient: Polynomial, remainder: Polynomial) -> Self {
        Self {
            quotient,
            remainder,
        }
    }

    /// A division that left no remainder.
    #[must_use]
    pub fn exact(quotient: Polynomial) -> Self {
        Self::new(quotient, Polynomial::zero())
    }

    /// Returns the quotient.
    #[must_use]
    pub fn quotient(&self) -> &Polynomial {
        &self.quotient
    }

    /// Returns the remainder (the zero polynomial for exact divisions).
    #[must_use]
    pub fn remainder(&self) -> &Polynomial {
        &self.remainder
    }

    /// Returns the degree of the remainder.
    #[must_use]
    pub fn remainder_degree(&self) -> i32 {
        self.remainder.degree()
    }

    /// Returns true if the remainder is zero.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.remainder.is_zero()
    }

    /// Replaces the remainder terms, normalizing them.
    pub fn set_remainder_terms(&mut self, terms: &[Term]) {
        self.remainder.set_terms(terms);
    }

    /// Splits into `(quotient, remainder)`.
    #[must_use]
    pub fn into_parts(self) -> (Polynomial, Polynomial) {
        (self.quotient, self.remainder)
    }
}

impl From<Polynomial> for Division {
    fn from(quotient: Polynomial) -> Self {
        Self::exact(quotient)
    }
}

impl Mul<&Division> for &Division {
    type Output = Division;

    /// Multiplies the quotients, and separately convolves the remainders.
    ///
    /// The remainder product is not a remainder of the quotient product
    /// with respect to any divisor; it only carries both remainders along.
    fn mul(self, rhs: &Division) -> Division {
        let quotient = &self.quotient * &rhs.quotient;
        let mut remainder = vec![Term::zero()];
        remainder.extend(convolve(self.remainder.terms(), rhs.remainder.terms()));
        Division::new(quotient, Polynomial::from_terms(remainder))
    }
}

impl Polynomial {
    /// Divides this polynomial by `denominator`.
    ///
    /// # Errors
    ///
    /// - [`PolyError::DivisionByZero`] if `denominator` is zero.
    /// - [`PolyError::ImproperFraction`] if `denominator` has a higher degree
    ///   than `self`; such a division would leave a zero quotient and is
    ///   rejected rather than returned as a pure remainder.
    ///
    /// # Example
    ///
    /// ```
    /// use realroot_poly::Polynomial;
    ///
    /// // (2x^3 - 3x^2 + 4x + 5) / (x + 2) = 2x^2 - 7x + 18, remainder -31
    /// let p = Polynomial::from_coefficients(&[2.0, -3.0, 4.0, 5.0]);
    /// let d = Polynomial::from_coefficients(&[1.0, 2.0]);
    /// let division = p.long_div(&d).unwrap();
    ///
    /// assert_eq!(*division.quotient(), Polynomial::from_coefficients(&[2.0, -7.0, 18.0]));
    /// assert_eq!(*division.remainder(), Polynomial::constant(-31.0));
    /// ```
    pub fn long_div(&self, denominator: &Polynomial) -> PolyResult<Division> {
        if denominator.is_zero() {
            return Err(PolyError::DivisionByZero);
        }
        if denominator.degree() > self.degree() {
            return Err(PolyError::ImproperFraction {
                numerator_degree: self.degree(),
                denominator_degree: denominator.degree(),
            });
        }
        if denominator.term_count() == 1 && denominator.degree() == 0 {
            return self
                .div_scalar(denominator.leading_coefficient())
                .map(Division::exact);
        }

        let numerator = self.terms();
        let divisor = denominator.terms();
        let lead = divisor[0];

        let mut window: Vec<Term> = numerator.to_vec();
        let mut quotient: Vec<Term> = Vec::with_capacity(numerator.len());

        loop {
            let q = window[0] / lead;
            quotient.push(q);

            let mut subtrahend: Vec<Term> = divisor.iter().map(|t| *t * q).collect();
            if window.len() > subtrahend.len() {
                subtrahend.push(Term::zero());
            }
            if tail_exponent(&window) > tail_exponent(&subtrahend) {
                pull_down(&mut window, numerator);
            }
            while window.len() < subtrahend.len() {
                pull_down(&mut window, numerator);
            }

            // The leading difference is zero by construction and is dropped
            window = window
                .iter()
                .zip(&subtrahend)
                .skip(1)
                .map(|(w, s)| Term::new(w.coefficient - s.coefficient, w.exponent))
                .collect();
            if window.is_empty() {
                window.push(Term::zero());
            }
            if window.len() == 1 && window[0].exponent != 0 && window[0].is_zero() {
                pull_down(&mut window, numerator);
            }

            let exhausted = window.iter().all(Term::is_zero) && tail_exponent(&window) <= 0;
            trace!(
                quotient_term = %q,
                window_len = window.len(),
                exhausted,
                "long division step"
            );

            if q.exponent == 0 || exhausted || window[0].exponent < denominator.degree() {
                break;
            }
        }

        Ok(Division::new(
            Polynomial::from_terms(quotient),
            Polynomial::from_terms(window),
        ))
    }
}

/// Exponent of the last (lowest) term in a window.
fn tail_exponent(terms: &[Term]) -> i32 {
    terms.last().map_or(0, |t| t.exponent)
}

/// Appends the numerator term one power below the window's tail, or a zero
/// term of that power if the numerator has none.
fn pull_down(window: &mut Vec<Term>, numerator: &[Term]) {
    let target = tail_exponent(window) - 1;
    let term = numerator
        .iter()
        .find(|t| t.exponent == target)
        .copied()
        .unwrap_or(Term::new(0.0, target));
    window.push(term);
}
