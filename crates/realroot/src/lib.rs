//! # realroot
//!
//! Single-variable polynomials with real coefficients.
//!
//! ## Features
//!
//! - **Normalized representation**: dense, descending, zero-padded terms
//! - **Arithmetic**: against scalars, single terms and other polynomials
//! - **Long division**: quotient and remainder as a [`poly::Division`]
//! - **Root finding**: bracket scan, Halley refinement and deflation, with
//!   closed forms for degree 1 and 2
//! - **Fractions and integrals**: unsimplified `P/Q` and definite integrals
//!
//! ## Quick Start
//!
//! ```
//! use realroot::prelude::*;
//!
//! // x^3 - 6x^2 + 11x - 6 = (x - 1)(x - 2)(x - 3)
//! let p = Polynomial::from_coefficients(&[1.0, -6.0, 11.0, -6.0]);
//!
//! let division = p.long_div(&Polynomial::from_coefficients(&[1.0, -1.0])).unwrap();
//! assert!(division.is_exact());
//!
//! let mut zeros = find_all_real_zeros(&p).unwrap();
//! zeros.sort_by(f64::total_cmp);
//! assert!((zeros[2] - 3.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use realroot_integrate as integrate;
pub use realroot_poly as poly;
pub use realroot_rational_func as rational_func;
pub use realroot_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use realroot_integrate::{definite_integral, definite_integral_numerically};
    pub use realroot_poly::{Division, PolyError, PolyResult, Polynomial, Term};
    pub use realroot_rational_func::PolynomialFraction;
    pub use realroot_solve::{
        find_all_real_zeros, find_all_real_zeros_with_config, RootFinderConfig, SolveError,
        SolveResult,
    };
}
