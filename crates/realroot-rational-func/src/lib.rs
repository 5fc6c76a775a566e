//! Polynomial fractions `P(x)/Q(x)`.
//!
//! This crate provides:
//! - [`PolynomialFraction`]: a numerator with an optional denominator
//! - Arithmetic by cross-multiplication (add, sub, mul, checked division)
//! - The quotient-rule derivative
//! - Splitting off the polynomial part with long division
//! - Zeros and poles through the real root finder
//!
//! Fractions are never reduced: no common factor is cancelled between
//! numerator and denominator.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod arithmetic;
mod rational_func;

pub use rational_func::PolynomialFraction;
