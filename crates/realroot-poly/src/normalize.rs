//! Term normalization.
//!
//! Every polynomial term list passes through [`combine_like_terms`] before it
//! is stored. The result satisfies:
//!
//! - terms are sorted by strictly descending exponent, with no duplicates
//! - every exponent from the highest one down to 0 is present (zero-padded)
//!   before leading zeros are trimmed; if only a negative-exponent term
//!   survives the trim, the list has a negative degree and no `x^0` term
//! - the leading coefficient is nonzero, unless the list is exactly `0·x^0`
//! - no zero-coefficient term trails at a negative exponent
//! - no coefficient is `-0.0`
//!
//! Both functions are pure: they take a term list and return a new one.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::term::Term;

/// Sums terms that share an exponent, then pads and trims the result.
///
/// Terms are combined in first-occurrence order, so the floating-point
/// summation order is deterministic for a given input.
#[must_use]
pub fn combine_like_terms(terms: &[Term]) -> Vec<Term> {
    let mut slots: FxHashMap<i32, usize> = FxHashMap::default();
    let mut combined: Vec<Term> = Vec::with_capacity(terms.len());

    for term in terms {
        if let Some(&slot) = slots.get(&term.exponent) {
            combined[slot].coefficient += term.coefficient;
        } else {
            slots.insert(term.exponent, combined.len());
            combined.push(*term);
        }
    }

    interpolate_and_trim(combined)
}

/// Pads missing powers down to `x^0`, sorts by descending exponent and trims
/// degenerate leading and trailing zero terms.
///
/// Expects terms whose exponents are already unique. An empty list is
/// treated as the zero polynomial.
#[must_use]
pub fn interpolate_and_trim(mut terms: Vec<Term>) -> Vec<Term> {
    let Some(highest) = terms.iter().map(|t| t.exponent).max() else {
        return vec![Term::zero()];
    };
    if terms.len() == 1 && terms[0].is_canonical_zero() {
        return vec![Term::zero()];
    }

    let present: FxHashSet<i32> = terms.iter().map(|t| t.exponent).collect();
    for exponent in (0..=highest).rev() {
        if !present.contains(&exponent) {
            terms.push(Term::new(0.0, exponent));
        }
    }
    terms.sort_by(|a, b| b.exponent.cmp(&a.exponent));

    // Degree shrinks when the leading coefficient cancels
    let leading_zeros = terms
        .iter()
        .take_while(|t| t.is_zero())
        .count()
        .min(terms.len() - 1);
    terms.drain(..leading_zeros);

    while terms.len() > 1 && terms.last().is_some_and(|t| t.is_zero() && t.exponent < 0) {
        terms.pop();
    }

    for term in &mut terms {
        if term.coefficient == 0.0 {
            term.coefficient = 0.0;
        }
    }

    if terms.len() == 1 && terms[0].is_zero() {
        terms[0] = Term::zero();
    }

    terms
}

/// Returns the highest exponent in a term list (0 for an empty list).
#[must_use]
pub fn highest_exponent(terms: &[Term]) -> i32 {
    terms.iter().map(|t| t.exponent).max().unwrap_or(0)
}

/// Returns the lowest exponent in a term list (0 for an empty list).
#[must_use]
pub fn lowest_exponent(terms: &[Term]) -> i32 {
    terms.iter().map(|t| t.exponent).min().unwrap_or(0)
}
