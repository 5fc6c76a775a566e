//! Arithmetic on polynomial fractions.
//!
//! Everything is cross-multiplication; a missing denominator acts as 1 and
//! stays missing when both operands lack one.

use std::ops::{Add, Mul, Neg, Sub};

use realroot_poly::{PolyError, PolyResult, Polynomial};

use crate::PolynomialFraction;

/// Product of two optional denominators.
fn denominator_product(a: Option<&Polynomial>, b: Option<&Polynomial>) -> Option<Polynomial> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a * b),
        (Some(d), None) | (None, Some(d)) => Some(d.clone()),
        (None, None) => None,
    }
}

/// `p · d`, or `p` when there is no `d`.
fn times(p: &Polynomial, d: Option<&Polynomial>) -> Polynomial {
    match d {
        Some(d) => p * d,
        None => p.clone(),
    }
}

impl PolynomialFraction {
    /// Adds two fractions by reference.
    ///
    /// a/b + c/d = (ad + cb) / bd
    #[must_use]
    pub fn add_ref(&self, other: &Self) -> Self {
        let numerator = &times(self.numerator(), other.denominator())
            + &times(other.numerator(), self.denominator());
        let denominator = denominator_product(self.denominator(), other.denominator());
        Self::from_parts(numerator, denominator)
    }

    /// Subtracts another fraction from this one.
    #[must_use]
    pub fn sub_ref(&self, other: &Self) -> Self {
        self.add_ref(&other.neg_ref())
    }

    /// Multiplies two fractions.
    #[must_use]
    pub fn mul_ref(&self, other: &Self) -> Self {
        let numerator = self.numerator() * other.numerator();
        let denominator = denominator_product(self.denominator(), other.denominator());
        Self::from_parts(numerator, denominator)
    }

    /// Divides this fraction by another.
    ///
    /// # Errors
    ///
    /// [`PolyError::DivisionByZero`] if `other` is zero.
    pub fn checked_div(&self, other: &Self) -> PolyResult<Self> {
        if other.is_zero() {
            return Err(PolyError::DivisionByZero);
        }
        let numerator = times(self.numerator(), other.denominator());
        let denominator = times(other.numerator(), self.denominator());
        Self::new(numerator, denominator)
    }

    /// Negates the numerator.
    #[must_use]
    pub fn neg_ref(&self) -> Self {
        Self::from_parts(-self.numerator(), self.denominator().cloned())
    }
}

impl Add for PolynomialFraction {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        self.add_ref(&other)
    }
}

impl Add<&PolynomialFraction> for PolynomialFraction {
    type Output = Self;

    fn add(self, other: &Self) -> Self::Output {
        self.add_ref(other)
    }
}

impl Sub for PolynomialFraction {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        self.sub_ref(&other)
    }
}

impl Sub<&PolynomialFraction> for PolynomialFraction {
    type Output = Self;

    fn sub(self, other: &Self) -> Self::Output {
        self.sub_ref(other)
    }
}

impl Mul for PolynomialFraction {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        self.mul_ref(&other)
    }
}

impl Mul<&PolynomialFraction> for PolynomialFraction {
    type Output = Self;

    fn mul(self, other: &Self) -> Self::Output {
        self.mul_ref(other)
    }
}

impl Neg for PolynomialFraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.neg_ref()
    }
}
