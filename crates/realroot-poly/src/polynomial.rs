//! The normalized polynomial type.

use std::fmt;

use num_traits::{One, Zero};

use crate::error::{PolyError, PolyResult};
use crate::normalize::{combine_like_terms, lowest_exponent};
use crate::term::Term;

/// A single-variable polynomial with real coefficients.
///
/// Terms are kept dense and sorted by descending exponent; see the
/// [`normalize`](crate::normalize) module for the full invariant. The
/// degree is cached and recomputed whenever the terms change.
///
/// # Example
///
/// ```
/// use realroot_poly::Polynomial;
///
/// // 3x^4 - 2x^2 + 8: every power has to be given
/// let p = Polynomial::from_coefficients(&[3.0, 0.0, -2.0, 0.0, 8.0]);
/// assert_eq!(p.degree(), 4);
/// assert_eq!(p.evaluate(1.0), 9.0);
/// ```
#[derive(Clone, Debug)]
pub struct Polynomial {
    terms: Vec<Term>,
    degree: i32,
}

impl Polynomial {
    /// Creates the zero polynomial `0·x^0`.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            terms: vec![Term::zero()],
            degree: 0,
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self::from_terms(vec![Term::constant(c)])
    }

    /// Creates the polynomial `c·x^n`, zero-padded down to `x^0`.
    #[must_use]
    pub fn monomial(c: f64, n: i32) -> Self {
        Self::from_terms(vec![Term::new(c, n)])
    }

    /// Creates a polynomial from a dense coefficient list, highest power
    /// first.
    ///
    /// A list of length `N` describes a degree `N-1` polynomial: index 0
    /// holds the `x^(N-1)` coefficient and index `N-1` the constant term.
    /// Absent powers must be given as `0.0`.
    #[must_use]
    pub fn from_coefficients(coefficients: &[f64]) -> Self {
        let top = coefficients.len();
        let terms: Vec<Term> = coefficients
            .iter()
            .enumerate()
            .map(|(i, &c)| Term::new(c, exponent_from_len(top - 1 - i)))
            .collect();
        Self::from_terms(terms)
    }

    /// Creates a polynomial from an arbitrary term list.
    ///
    /// Terms are combined, padded and trimmed; an empty list yields the
    /// zero polynomial.
    #[must_use]
    pub fn from_terms(terms: Vec<Term>) -> Self {
        let mut p = Self::zero();
        p.set_terms(&terms);
        p
    }

    /// Replaces the terms of this polynomial, normalizing them.
    pub fn set_terms(&mut self, terms: &[Term]) {
        self.terms = combine_like_terms(terms);
        self.degree = self.terms[0].exponent;
    }

    /// Returns the normalized terms, highest exponent first.
    #[inline]
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Iterates over the terms, highest exponent first.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// Returns the degree (exponent of the leading term).
    #[inline]
    #[must_use]
    pub fn degree(&self) -> i32 {
        self.degree
    }

    /// Returns the number of stored terms, including zero padding.
    #[inline]
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Returns the lowest exponent present.
    #[must_use]
    pub fn lowest_exponent(&self) -> i32 {
        lowest_exponent(&self.terms)
    }

    /// Returns the leading term.
    #[inline]
    #[must_use]
    pub fn leading_term(&self) -> Term {
        self.terms[0]
    }

    /// Returns the leading coefficient.
    #[inline]
    #[must_use]
    pub fn leading_coefficient(&self) -> f64 {
        self.terms[0].coefficient
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.len() == 1 && self.terms[0].is_canonical_zero()
    }

    /// Returns the term with the given exponent.
    ///
    /// # Errors
    ///
    /// [`PolyError::IndexOutOfRange`] if `exponent` is negative or above
    /// the degree.
    pub fn term(&self, exponent: i32) -> PolyResult<&Term> {
        let index = self.index_of(exponent)?;
        Ok(&self.terms[index])
    }

    /// Returns the coefficient of `x^exponent`.
    ///
    /// # Errors
    ///
    /// [`PolyError::IndexOutOfRange`] if `exponent` is negative or above
    /// the degree.
    pub fn coefficient(&self, exponent: i32) -> PolyResult<f64> {
        self.term(exponent).map(|t| t.coefficient)
    }

    /// Overwrites the coefficient of `x^exponent` and renormalizes.
    ///
    /// Setting the leading coefficient to zero lowers the degree.
    ///
    /// # Errors
    ///
    /// [`PolyError::IndexOutOfRange`] if `exponent` is negative or above
    /// the degree.
    pub fn set_coefficient(&mut self, exponent: i32, coefficient: f64) -> PolyResult<()> {
        let index = self.index_of(exponent)?;
        let mut terms = self.terms.clone();
        terms[index].coefficient = coefficient;
        self.set_terms(&terms);
        Ok(())
    }

    fn index_of(&self, exponent: i32) -> PolyResult<usize> {
        if exponent < 0 || exponent > self.degree {
            return Err(PolyError::IndexOutOfRange {
                exponent,
                degree: self.degree,
            });
        }
        // Dense from degree down to 0
        usize::try_from(self.degree - exponent).map_err(|_| PolyError::IndexOutOfRange {
            exponent,
            degree: self.degree,
        })
    }

    /// Returns the dense coefficient list, highest power first.
    ///
    /// This is the inverse of [`Polynomial::from_coefficients`]. Terms with
    /// negative exponents are not part of the list.
    #[must_use]
    pub fn coefficients(&self) -> Vec<f64> {
        self.terms
            .iter()
            .filter(|t| t.exponent >= 0)
            .map(|t| t.coefficient)
            .collect()
    }

    /// Differentiates this polynomial in place.
    pub fn differentiate(&mut self) {
        *self = self.derivative();
    }

    /// Returns the derivative. The degree drops by one; a constant
    /// differentiates to zero.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let terms: Vec<Term> = self.terms.iter().map(Term::derivative).collect();
        Self::from_terms(terms)
    }

    /// Integrates this polynomial in place. No constant is added.
    ///
    /// # Errors
    ///
    /// [`PolyError::Domain`] if a term has exponent −1. The polynomial is
    /// unchanged on error.
    pub fn integrate(&mut self) -> PolyResult<()> {
        *self = self.antiderivative()?;
        Ok(())
    }

    /// Returns the antiderivative with a zero constant of integration.
    ///
    /// # Errors
    ///
    /// [`PolyError::Domain`] if a term has exponent −1.
    pub fn antiderivative(&self) -> PolyResult<Self> {
        let terms = self
            .terms
            .iter()
            .map(Term::antiderivative)
            .collect::<PolyResult<Vec<_>>>()?;
        Ok(Self::from_terms(terms))
    }

    /// Evaluates the polynomial at `x` using Horner's scheme.
    ///
    /// A negative-exponent tail is added term by term.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        let mut result = 0.0;
        let mut tail = 0.0;
        for term in &self.terms {
            if term.exponent >= 0 {
                result = result * x + term.coefficient;
            } else {
                tail += term.coefficient * x.powi(term.exponent);
            }
        }
        result + tail
    }

    /// Compares two polynomials term by term with an explicit coefficient
    /// tolerance.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.degree == other.degree
            && self.terms.len() == other.terms.len()
            && self.terms.iter().zip(&other.terms).all(|(a, b)| {
                a.exponent == b.exponent && (a.coefficient - b.coefficient).abs() <= tolerance
            })
    }
}

/// Converts a dense position to an exponent.
fn exponent_from_len(position: usize) -> i32 {
    i32::try_from(position).unwrap_or(i32::MAX)
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Polynomial {
    /// Same degree, same number of terms, and pairwise equal terms within
    /// [`COMPARISON_PRECISION`](crate::COMPARISON_PRECISION).
    fn eq(&self, other: &Self) -> bool {
        self.degree == other.degree
            && self.terms.len() == other.terms.len()
            && self.terms.iter().zip(&other.terms).all(|(a, b)| a == b)
    }
}

impl From<Vec<Term>> for Polynomial {
    fn from(terms: Vec<Term>) -> Self {
        Self::from_terms(terms)
    }
}

impl From<&[f64]> for Polynomial {
    fn from(coefficients: &[f64]) -> Self {
        Self::from_coefficients(coefficients)
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Polynomial::constant(1.0)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for term in &self.terms {
            write!(f, "{term}")?;
        }
        Ok(())
    }
}
