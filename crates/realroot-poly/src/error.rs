//! Error types for polynomial operations.

use thiserror::Error;

/// Errors raised by term and polynomial operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PolyError {
    /// Integrating `x^-1` would divide by a zero exponent.
    #[error("cannot integrate a term with exponent {exponent}: the result is not a power of x")]
    Domain {
        /// Exponent of the offending term.
        exponent: i32,
    },

    /// The polynomial holds no term at the requested exponent.
    #[error("no term with exponent {exponent} in a polynomial of degree {degree}")]
    IndexOutOfRange {
        /// Requested exponent.
        exponent: i32,
        /// Degree of the polynomial that was indexed.
        degree: i32,
    },

    /// Division by the zero polynomial or by the scalar zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The denominator has a higher degree than the numerator.
    #[error(
        "dividing a degree-{numerator_degree} polynomial by a degree-{denominator_degree} \
         polynomial would yield an improper fraction"
    )]
    ImproperFraction {
        /// Degree of the numerator.
        numerator_degree: i32,
        /// Degree of the denominator.
        denominator_degree: i32,
    },
}

/// Result alias for polynomial operations.
pub type PolyResult<T> = Result<T, PolyError>;
