//! Error types for root finding.

use realroot_poly::PolyError;
use thiserror::Error;

/// Errors raised by the root finders.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SolveError {
    /// A closed-form solver was handed a polynomial of the wrong shape.
    #[error("expected a polynomial of degree {expected}, found degree {found}")]
    InvalidDegree {
        /// Degree the solver handles.
        expected: i32,
        /// Degree of the polynomial it was given.
        found: i32,
    },

    /// The quadratic has no real roots.
    #[error("quadratic has complex roots (discriminant {discriminant})")]
    ComplexRootsUnsupported {
        /// The negative discriminant `p²/4 − q` of the monic form.
        discriminant: f64,
    },

    /// Neither `f` nor `f'` changed sign anywhere in the bracket.
    #[error("no sign change found in the bracket [{lower}, {upper}]")]
    NoZeroFoundInBracket {
        /// Lower end of the scanned bracket.
        lower: f64,
        /// Upper end of the scanned bracket.
        upper: f64,
    },

    /// Only non-negative powers of x can be solved for.
    #[error("cannot solve a polynomial with a term of exponent {exponent}")]
    NegativeExponent {
        /// Lowest exponent present.
        exponent: i32,
    },

    /// A polynomial operation failed.
    #[error(transparent)]
    Poly(#[from] PolyError),
}

/// Result alias for root finding.
pub type SolveResult<T> = Result<T, SolveError>;
