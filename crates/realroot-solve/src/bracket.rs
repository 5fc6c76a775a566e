//! Bracket scan for a Halley starting guess.
//!
//! `f` and `f'` are sampled at `lower + k·step` for increasing `k`. The first
//! sample at which either changes sign relative to the previous sample is
//! the guess. A sign change of `f'` marks a turning point, which is where a
//! root of even multiplicity would sit.

use realroot_poly::Polynomial;
use tracing::debug;

use crate::config::RootFinderConfig;
use crate::error::{SolveError, SolveResult};

/// Scans the default bracket `[-40, 40]` for a starting guess.
///
/// # Errors
///
/// [`SolveError::NoZeroFoundInBracket`] if neither `f` nor `f'` changes
/// sign between two consecutive samples.
pub fn scan_for_sign_change(function: &Polynomial) -> SolveResult<f64> {
    scan_for_sign_change_with_config(function, &RootFinderConfig::default())
}

/// Scans the configured bracket for a starting guess.
///
/// # Errors
///
/// [`SolveError::NoZeroFoundInBracket`] if neither `f` nor `f'` changes
/// sign between two consecutive samples.
pub fn scan_for_sign_change_with_config(
    function: &Polynomial,
    config: &RootFinderConfig,
) -> SolveResult<f64> {
    let derivative = function.derivative();
    let mut previous: Option<(f64, f64)> = None;

    for k in 0..config.sample_count() {
        let x = config.sample(k);
        let value = function.evaluate(x);
        let slope = derivative.evaluate(x);

        if let Some((previous_value, previous_slope)) = previous {
            if value_crosses_zero(previous_value, value)
                || slope_changes_sign(previous_slope, slope)
            {
                debug!(guess = x, sample = k, "bracket scan found a starting guess");
                return Ok(x);
            }
        }
        previous = Some((value, slope));
    }

    Err(SolveError::NoZeroFoundInBracket {
        lower: config.lower_bound,
        upper: config.upper_bound,
    })
}

/// Zero counts as non-negative, so landing exactly on a root is a crossing.
fn value_crosses_zero(previous: f64, current: f64) -> bool {
    (previous < 0.0 && current >= 0.0) || (previous >= 0.0 && current < 0.0)
}

fn slope_changes_sign(previous: f64, current: f64) -> bool {
    (previous < 0.0 && current > 0.0) || (previous > 0.0 && current < 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sign_change() {
        // (x - 1)(x - 2)(x - 3): f crosses zero between 0.8 and 1.2
        let p = Polynomial::from_coefficients(&[1.0, -6.0, 11.0, -6.0]);
        let guess = scan_for_sign_change(&p).unwrap();
        assert!((guess - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_turning_point_counts() {
        // x^2 + 1 never crosses zero, but f' does at 0
        let p = Polynomial::from_coefficients(&[1.0, 0.0, 1.0]);
        let guess = scan_for_sign_change(&p).unwrap();
        assert!(guess.abs() < 0.5);
    }

    #[test]
    fn test_first_of_several_crossings() {
        // x^4 - 5x^2 + 4: the crossing at -2 is first seen at sample -1.6
        let p = Polynomial::from_coefficients(&[1.0, 0.0, -5.0, 0.0, 4.0]);
        let guess = scan_for_sign_change(&p).unwrap();
        assert!((guess + 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_no_sign_change_outside_bracket() {
        // (x - 100)^3 is negative and increasing on [-40, 40]
        let p = Polynomial::from_coefficients(&[1.0, -300.0, 30_000.0, -1_000_000.0]);
        assert_eq!(
            scan_for_sign_change(&p),
            Err(SolveError::NoZeroFoundInBracket {
                lower: -40.0,
                upper: 40.0
            })
        );
    }

    #[test]
    fn test_custom_bracket() {
        // x^3 - 10 has its root at 2.15, outside [-1, 1]
        let p = Polynomial::from_coefficients(&[1.0, 0.0, 0.0, -10.0]);
        let narrow = RootFinderConfig::default().with_bracket(-1.0, 1.0).with_step(0.1);
        assert_eq!(
            scan_for_sign_change_with_config(&p, &narrow),
            Err(SolveError::NoZeroFoundInBracket {
                lower: -1.0,
                upper: 1.0
            })
        );

        let wide = RootFinderConfig::default().with_bracket(0.0, 4.0).with_step(0.5);
        assert_eq!(scan_for_sign_change_with_config(&p, &wide).unwrap(), 2.5);
    }

    #[test]
    fn test_first_sample_never_matches() {
        // x^3 - 3x^2 + 2x = x(x - 1)(x - 2) is zero at the first sample
        let p = Polynomial::from_coefficients(&[1.0, -3.0, 2.0, 0.0]);
        let config = RootFinderConfig::default().with_bracket(0.0, 4.0).with_step(0.5);
        assert_eq!(scan_for_sign_change_with_config(&p, &config).unwrap(), 0.5);

        // f = x starts on its root and only grows, f' is constant
        let line = Polynomial::from_coefficients(&[1.0, 0.0]);
        assert_eq!(
            scan_for_sign_change_with_config(&line, &config),
            Err(SolveError::NoZeroFoundInBracket {
                lower: 0.0,
                upper: 4.0
            })
        );
    }

    #[test]
    fn test_crossing_rules() {
        assert!(value_crosses_zero(-1.0, 0.0));
        assert!(value_crosses_zero(0.0, -1.0));
        assert!(!value_crosses_zero(0.0, 1.0));
        assert!(!slope_changes_sign(0.0, 1.0));
        assert!(slope_changes_sign(1.0, -1.0));
    }
}
