//! # realroot-poly
//!
//! Single-variable polynomials with real (`f64`) coefficients.
//!
//! This crate provides:
//! - [`Term`]: one `coefficient · x^exponent` summand
//! - [`normalize`]: like-term combination, zero-padding and trimming
//! - [`Polynomial`]: a dense, always-normalized term list
//! - Arithmetic against scalars, single terms and other polynomials
//! - Long division with remainder tracking ([`Division`])
//!
//! ## Representation
//!
//! Terms are stored by strictly descending exponent. Every exponent from
//! the degree down to 0 is present exactly once, so
//! `3x^4 - 2x^2 + 8` is held as `3x^4 + 0x^3 - 2x^2 + 0x + 8`. Negative
//! exponents only ever appear as a trailing tail left over by division.
//! Every mutation is routed back through the normalizer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod arithmetic;
pub mod division;
pub mod error;
pub mod normalize;
pub mod polynomial;
pub mod term;

#[cfg(test)]
mod proptests;

pub use division::Division;
pub use error::{PolyError, PolyResult};
pub use polynomial::Polynomial;
pub use term::{Term, COMPARISON_PRECISION};
