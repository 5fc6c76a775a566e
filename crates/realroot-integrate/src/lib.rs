//! Definite integration of polynomials.
//!
//! Two routes to the same area:
//!
//! - **Symbolic**: evaluate the antiderivative at both ends,
//!   `F(upper) - F(lower)`
//! - **Numerical**: a Gauss-Kronrod G7K15 rule, which also reports an error
//!   estimate and is exact (up to rounding) for polynomials of degree 22 or
//!   less
//!
//! # Example
//!
//! ```
//! use realroot_integrate::{definite_integral, definite_integral_numerically};
//! use realroot_poly::Polynomial;
//!
//! // ∫₀³ x² dx = 9
//! let p = Polynomial::from_coefficients(&[1.0, 0.0, 0.0]);
//! let exact = definite_integral(&p, 0.0, 3.0).unwrap();
//! let numeric = definite_integral_numerically(&p, 0.0, 3.0);
//!
//! assert!((exact - 9.0).abs() < 1e-12);
//! assert!((numeric.value - 9.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod definite;
pub mod gauss_kronrod;

#[cfg(test)]
mod proptests;

pub use definite::{definite_integral, definite_integral_numerically, verify_antiderivative};
pub use gauss_kronrod::{GaussKronrodRule, QuadratureResult};
