//! Polynomial arithmetic.
//!
//! Addition appends the right-hand terms to the left-hand list and lets the
//! normalizer combine them; subtraction is addition of the negated right-hand
//! side. Multiplication is the full pairwise product of the two dense term
//! lists. Every result is rebuilt through [`Polynomial::from_terms`].

use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{PolyError, PolyResult};
use crate::polynomial::Polynomial;
use crate::term::Term;

/// Pairwise products of two term lists (coefficients multiply, exponents add).
pub(crate) fn convolve(left: &[Term], right: &[Term]) -> Vec<Term> {
    let mut products = Vec::with_capacity(left.len() * right.len());
    for l in left {
        for r in right {
            products.push(*l * *r);
        }
    }
    products
}

impl Polynomial {
    /// Multiplies every coefficient by a scalar.
    #[must_use]
    pub fn scale(&self, c: f64) -> Self {
        let terms: Vec<Term> = self.iter().map(|t| *t * c).collect();
        Self::from_terms(terms)
    }

    /// Divides every coefficient by a scalar.
    ///
    /// # Errors
    ///
    /// [`PolyError::DivisionByZero`] if `c` is zero.
    pub fn div_scalar(&self, c: f64) -> PolyResult<Self> {
        if c == 0.0 {
            return Err(PolyError::DivisionByZero);
        }
        let terms: Vec<Term> = self.iter().map(|t| *t / c).collect();
        Ok(Self::from_terms(terms))
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::constant(1.0);
        }
        if n == 1 {
            return self.clone();
        }

        let mut result = Self::constant(1.0);
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            base = &base * &base;
            exp >>= 1;
        }

        result
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        let mut terms = self.terms().to_vec();
        terms.extend_from_slice(rhs.terms());
        Polynomial::from_terms(terms)
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        self + &rhs.scale(-1.0)
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    /// Schoolbook product over the dense term lists: O(n·m).
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        let mut terms = vec![Term::zero()];
        terms.extend(convolve(self.terms(), rhs.terms()));
        Polynomial::from_terms(terms)
    }
}

impl Add<Term> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Term) -> Polynomial {
        let mut terms = self.terms().to_vec();
        terms.push(rhs);
        Polynomial::from_terms(terms)
    }
}

impl Sub<Term> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Term) -> Polynomial {
        self + -rhs
    }
}

impl Mul<Term> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Term) -> Polynomial {
        Polynomial::from_terms(convolve(self.terms(), &[rhs]))
    }
}

impl Add<f64> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: f64) -> Polynomial {
        self + Term::constant(rhs)
    }
}

impl Sub<f64> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: f64) -> Polynomial {
        self + Term::constant(-rhs)
    }
}

impl Mul<f64> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: f64) -> Polynomial {
        self.scale(rhs)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.scale(-1.0)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.scale(-1.0)
    }
}

impl Add<&Polynomial> for Term {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        rhs + self
    }
}

impl Sub<&Polynomial> for Term {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        &-rhs + self
    }
}

impl Add for Term {
    type Output = Polynomial;

    /// Two terms form a (possibly single-term) polynomial.
    fn add(self, rhs: Term) -> Polynomial {
        Polynomial::from_terms(vec![self, rhs])
    }
}

impl Sub for Term {
    type Output = Polynomial;

    fn sub(self, rhs: Term) -> Polynomial {
        Polynomial::from_terms(vec![self, -rhs])
    }
}

/// Owned-operand forwarding onto the by-reference implementations.
macro_rules! forward_poly_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: &Polynomial) -> Polynomial {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<Polynomial> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                $imp::$method(self, &rhs)
            }
        }
    };
}

macro_rules! forward_copy_rhs_binop {
    ($imp:ident, $method:ident, $rhs:ty) => {
        impl $imp<$rhs> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: $rhs) -> Polynomial {
                $imp::$method(&self, rhs)
            }
        }
    };
}

forward_poly_binop!(Add, add);
forward_poly_binop!(Sub, sub);
forward_poly_binop!(Mul, mul);

forward_copy_rhs_binop!(Add, add, Term);
forward_copy_rhs_binop!(Sub, sub, Term);
forward_copy_rhs_binop!(Mul, mul, Term);
forward_copy_rhs_binop!(Add, add, f64);
forward_copy_rhs_binop!(Sub, sub, f64);
forward_copy_rhs_binop!(Mul, mul, f64);
