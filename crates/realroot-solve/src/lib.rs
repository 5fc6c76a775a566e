//! Real root finding for single-variable polynomials.
//!
//! This crate provides:
//!
//! - **Closed forms** for linear and quadratic polynomials
//! - **Halley's method**: third-order refinement of a starting guess
//! - **Bracket scan**: fixed-step search for a sign change of `f` or `f'`
//! - **Deflation driver**: repeatedly scans, refines and divides out a
//!   linear factor until the closed forms take over
//!
//! # Limitations
//!
//! The bracket is fixed (by default `[-40, 40]` in steps of `0.4`), so roots
//! outside it are never found. Repeated roots are not detected: a root of
//! even multiplicity may produce no sign change at all, and an odd
//! multiplicity may leave a quadratic with a slightly negative
//! discriminant after deflation.
//!
//! # Example
//!
//! ```
//! use realroot_poly::Polynomial;
//! use realroot_solve::find_all_real_zeros;
//!
//! // (x - 1)(x - 2)(x - 3)
//! let p = Polynomial::from_coefficients(&[1.0, -6.0, 11.0, -6.0]);
//! let mut zeros = find_all_real_zeros(&p).unwrap();
//! zeros.sort_by(f64::total_cmp);
//!
//! for (found, expected) in zeros.iter().zip([1.0, 2.0, 3.0]) {
//!     assert!((found - expected).abs() < 1e-9);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bracket;
pub mod closed_form;
pub mod config;
pub mod error;
pub mod halley;
pub mod zeros;

#[cfg(test)]
mod proptests;

pub use bracket::{scan_for_sign_change, scan_for_sign_change_with_config};
pub use closed_form::{find_zero_of_linear_term, find_zeros_of_quadratic_terms};
pub use config::RootFinderConfig;
pub use error::{SolveError, SolveResult};
pub use halley::{
    approximate_zero_by_halleys_method, approximate_zero_by_halleys_method_with_config,
};
pub use zeros::{
    deflate, find_all_real_zeros, find_all_real_zeros_detailed, find_all_real_zeros_with_config,
    Deflation, ZeroEstimate,
};
