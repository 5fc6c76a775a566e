//! Core polynomial fraction type.
//!
//! A fraction is a numerator polynomial over an optional denominator. A
//! missing denominator means the fraction is a plain polynomial; a present
//! one is never the zero polynomial.

use std::fmt;

use realroot_poly::{PolyError, PolyResult, Polynomial};
use realroot_solve::{find_all_real_zeros, SolveResult};

/// A quotient `P(x)/Q(x)` of two polynomials.
///
/// # Invariants
///
/// - `denominator`, when present, is not the zero polynomial
/// - numerator and denominator are stored as given, with no common factor
///   cancelled
///
/// # Example
///
/// ```
/// use realroot_poly::Polynomial;
/// use realroot_rational_func::PolynomialFraction;
///
/// // (x + 1) / (x - 1)
/// let f = PolynomialFraction::new(
///     Polynomial::from_coefficients(&[1.0, 1.0]),
///     Polynomial::from_coefficients(&[1.0, -1.0]),
/// )
/// .unwrap();
///
/// assert_eq!(f.evaluate(3.0), Some(2.0));
/// assert_eq!(f.evaluate(1.0), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PolynomialFraction {
    numerator: Polynomial,
    denominator: Option<Polynomial>,
}

impl PolynomialFraction {
    /// Creates `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// [`PolyError::DivisionByZero`] if `denominator` is zero.
    pub fn new(numerator: Polynomial, denominator: Polynomial) -> PolyResult<Self> {
        if denominator.is_zero() {
            return Err(PolyError::DivisionByZero);
        }
        Ok(Self {
            numerator,
            denominator: Some(denominator),
        })
    }

    /// Wraps a polynomial as a fraction without a denominator.
    #[must_use]
    pub fn from_polynomial(p: Polynomial) -> Self {
        Self {
            numerator: p,
            denominator: None,
        }
    }

    /// The zero fraction.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_polynomial(Polynomial::zero())
    }

    /// Builds a fraction from parts known to be valid.
    pub(crate) fn from_parts(numerator: Polynomial, denominator: Option<Polynomial>) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &Polynomial {
        &self.numerator
    }

    /// Returns the denominator, if any.
    #[must_use]
    pub fn denominator(&self) -> Option<&Polynomial> {
        self.denominator.as_ref()
    }

    /// Returns true if there is no denominator.
    #[must_use]
    pub fn is_polynomial(&self) -> bool {
        self.denominator.is_none()
    }

    /// Returns true if the numerator is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Evaluates the fraction at `x`.
    ///
    /// Returns `None` at a pole, where the denominator evaluates to zero.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn evaluate(&self, x: f64) -> Option<f64> {
        let value = self.numerator.evaluate(x);
        match &self.denominator {
            None => Some(value),
            Some(denominator) => {
                let below = denominator.evaluate(x);
                if below == 0.0 {
                    None
                } else {
                    Some(value / below)
                }
            }
        }
    }

    /// Computes the derivative with the quotient rule,
    /// `(u/v)' = (u'v - v'u) / v²`.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let u = &self.numerator;
        let Some(v) = &self.denominator else {
            return Self::from_polynomial(u.derivative());
        };

        let numerator = &(&u.derivative() * v) - &(&v.derivative() * u);
        Self::from_parts(numerator, Some(v * v))
    }

    /// Splits into a polynomial part and a proper fraction.
    ///
    /// Returns `(polynomial, proper)` where `proper` has a numerator of
    /// lower degree than its denominator, or a zero numerator. A fraction
    /// without a denominator is entirely polynomial part.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`Polynomial::long_div`].
    pub fn decompose_proper(&self) -> PolyResult<(Polynomial, Self)> {
        let Some(denominator) = &self.denominator else {
            return Ok((self.numerator.clone(), Self::zero()));
        };
        if self.numerator.degree() < denominator.degree() {
            return Ok((Polynomial::zero(), self.clone()));
        }

        let (quotient, remainder) = self.numerator.long_div(denominator)?.into_parts();
        Ok((quotient, Self::from_parts(remainder, Some(denominator.clone()))))
    }

    /// Real zeros of the numerator.
    ///
    /// Zeros shared with the denominator are not removed.
    ///
    /// # Errors
    ///
    /// Propagates root-finding failures.
    pub fn zeros(&self) -> SolveResult<Vec<f64>> {
        find_all_real_zeros(&self.numerator)
    }

    /// Real zeros of the denominator (empty without one).
    ///
    /// # Errors
    ///
    /// Propagates root-finding failures.
    pub fn poles(&self) -> SolveResult<Vec<f64>> {
        match &self.denominator {
            Some(denominator) => find_all_real_zeros(denominator),
            None => Ok(Vec::new()),
        }
    }
}

impl From<Polynomial> for PolynomialFraction {
    fn from(p: Polynomial) -> Self {
        Self::from_polynomial(p)
    }
}

impl fmt::Display for PolynomialFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.denominator {
            None => write!(f, "{}", self.numerator),
            Some(denominator) => write!(f, "({}) / ({})", self.numerator, denominator),
        }
    }
}
