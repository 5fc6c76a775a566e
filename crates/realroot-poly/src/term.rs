//! Single polynomial terms.
//!
//! A [`Term`] is a coefficient-exponent pair such as `3x^4`. It always
//! refers to the one variable `x`; terms never carry fractions, although
//! the exponent may be negative when a term is left over from division.

use std::fmt;
use std::ops::{Div, Mul, Neg};

use crate::error::{PolyError, PolyResult};

/// Tolerance used when comparing term coefficients.
pub const COMPARISON_PRECISION: f64 = 1e-15;

/// One summand `coefficient · x^exponent` of a polynomial.
#[derive(Clone, Copy, Debug)]
pub struct Term {
    /// The coefficient (the `A` in `A·x^y`).
    pub coefficient: f64,
    /// The exponent (the `y` in `A·x^y`).
    pub exponent: i32,
}

impl Term {
    /// Creates a term `coefficient · x^exponent`.
    #[inline]
    #[must_use]
    pub const fn new(coefficient: f64, exponent: i32) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// The canonical zero term `0 · x^0`.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0)
    }

    /// Creates a constant term `c · x^0`.
    #[inline]
    #[must_use]
    pub const fn constant(c: f64) -> Self {
        Self::new(c, 0)
    }

    /// Returns true if the coefficient is exactly zero (either sign).
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficient == 0.0
    }

    /// Returns true if this is the canonical zero term `0 · x^0`.
    #[inline]
    #[must_use]
    pub fn is_canonical_zero(&self) -> bool {
        self.is_zero() && self.exponent == 0
    }

    /// Differentiates this term in place.
    ///
    /// The derivative of a constant is the canonical zero term rather than
    /// a term of exponent −1.
    pub fn differentiate(&mut self) {
        *self = self.derivative();
    }

    /// Returns the derivative of this term.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.exponent == 0 {
            return Self::zero();
        }
        Self::new(
            self.coefficient * f64::from(self.exponent),
            self.exponent - 1,
        )
    }

    /// Integrates this term in place. No constant of integration is added.
    ///
    /// # Errors
    ///
    /// [`PolyError::Domain`] if the exponent is −1.
    pub fn integrate(&mut self) -> PolyResult<()> {
        *self = self.antiderivative()?;
        Ok(())
    }

    /// Returns the antiderivative `c/(e+1) · x^(e+1)` of this term.
    ///
    /// # Errors
    ///
    /// [`PolyError::Domain`] if the exponent is −1.
    pub fn antiderivative(&self) -> PolyResult<Self> {
        let exponent = self.exponent + 1;
        if exponent == 0 {
            return Err(PolyError::Domain {
                exponent: self.exponent,
            });
        }
        Ok(Self::new(self.coefficient / f64::from(exponent), exponent))
    }
}

impl Default for Term {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Term {
    /// Coefficients are compared within [`COMPARISON_PRECISION`], exponents
    /// exactly.
    fn eq(&self, other: &Self) -> bool {
        (self.coefficient - other.coefficient).abs() < COMPARISON_PRECISION
            && self.exponent == other.exponent
    }
}

impl From<(f64, i32)> for Term {
    fn from((coefficient, exponent): (f64, i32)) -> Self {
        Self::new(coefficient, exponent)
    }
}

impl Mul for Term {
    type Output = Self;

    /// Coefficients multiply, exponents add.
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.coefficient * rhs.coefficient, self.exponent + rhs.exponent)
    }
}

impl Div for Term {
    type Output = Self;

    /// Coefficients divide, exponents subtract.
    fn div(self, rhs: Self) -> Self {
        Self::new(self.coefficient / rhs.coefficient, self.exponent - rhs.exponent)
    }
}

impl Mul<f64> for Term {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.coefficient * rhs, self.exponent)
    }
}

impl Div<f64> for Term {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.coefficient / rhs, self.exponent)
    }
}

impl Neg for Term {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.coefficient, self.exponent)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0.0 would otherwise render as "-0.000"
        let coefficient = if self.coefficient == 0.0 {
            0.0
        } else {
            self.coefficient
        };
        write!(f, "{coefficient:+.3}x{}", self.exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_uses_tolerance() {
        assert_eq!(Term::new(1.0, 2), Term::new(1.0 + 1e-16, 2));
        assert_ne!(Term::new(1.0, 2), Term::new(1.0 + 1e-12, 2));
        assert_ne!(Term::new(1.0, 2), Term::new(1.0, 3));
    }

    #[test]
    fn test_term_products() {
        // 3x^2 * -2x^3 = -6x^5
        assert_eq!(Term::new(3.0, 2) * Term::new(-2.0, 3), Term::new(-6.0, 5));
        // 6x^5 / 2x^3 = 3x^2
        assert_eq!(Term::new(6.0, 5) / Term::new(2.0, 3), Term::new(3.0, 2));
        // x / x^3 = x^-2
        assert_eq!(Term::new(1.0, 1) / Term::new(1.0, 3), Term::new(1.0, -2));
        assert_eq!(Term::new(1.5, 4) * 2.0, Term::new(3.0, 4));
        assert_eq!(Term::new(1.5, 4) / 3.0, Term::new(0.5, 4));
        assert_eq!(-Term::new(1.5, 4), Term::new(-1.5, 4));
    }

    #[test]
    fn test_differentiate() {
        let mut t = Term::new(4.0, 3);
        t.differentiate();
        assert_eq!(t, Term::new(12.0, 2));

        // d/dx 7 = 0, not 0x^-1
        let mut c = Term::constant(7.0);
        c.differentiate();
        assert!(c.is_canonical_zero());

        // d/dx x^-2 = -2x^-3
        assert_eq!(Term::new(1.0, -2).derivative(), Term::new(-2.0, -3));
    }

    #[test]
    fn test_integrate() {
        let mut t = Term::new(6.0, 2);
        t.integrate().unwrap();
        assert_eq!(t, Term::new(2.0, 3));

        assert_eq!(Term::constant(8.5).antiderivative().unwrap(), Term::new(8.5, 1));
        assert_eq!(
            Term::new(4.0, -3).antiderivative().unwrap(),
            Term::new(-2.0, -2)
        );
    }

    #[test]
    fn test_integrate_reciprocal_is_domain_error() {
        let mut t = Term::new(1.0, -1);
        assert_eq!(t.integrate(), Err(PolyError::Domain { exponent: -1 }));
        // Left untouched on failure
        assert_eq!(t, Term::new(1.0, -1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Term::new(3.0, 4).to_string(), "+3.000x4");
        assert_eq!(Term::new(-0.5, 0).to_string(), "-0.500x0");
        assert_eq!(Term::new(-0.0, 1).to_string(), "+0.000x1");
    }
}
