//! Halley's method.
//!
//! Each step uses `f`, `f'` and `f''` at the current iterate:
//!
//! ```text
//! h = -f/f'     r = f''/f'
//! x' = x + h·(1 + r·h/2) / (1 + r·h + (r·h)²/6)
//! ```
//!
//! Iteration stops when `|f(x)|` is within the tolerance, when the
//! iteration cap is reached, when an update leaves `x` unchanged, or when the
//! step is not finite (a vanishing `f'`). The last iterate is returned in
//! every case; callers that need a certified root must evaluate it
//! themselves.

use realroot_poly::Polynomial;
use tracing::trace;

use crate::config::RootFinderConfig;

/// Refines `initial_guess` towards a zero of `function` with the default
/// parameters.
#[must_use]
pub fn approximate_zero_by_halleys_method(function: &Polynomial, initial_guess: f64) -> f64 {
    approximate_zero_by_halleys_method_with_config(
        function,
        initial_guess,
        &RootFinderConfig::default(),
    )
}

/// Refines `initial_guess` towards a zero of `function`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn approximate_zero_by_halleys_method_with_config(
    function: &Polynomial,
    initial_guess: f64,
    config: &RootFinderConfig,
) -> f64 {
    let first = function.derivative();
    let second = first.derivative();

    let mut x = initial_guess;
    let mut iteration = 1;

    while function.evaluate(x).abs() > config.tolerance && iteration < config.max_iterations {
        let previous = x;
        let slope = first.evaluate(previous);
        let h = -function.evaluate(previous) / slope;
        let r = second.evaluate(previous) / slope;
        let step = h * (1.0 + 0.5 * r * h) / (1.0 + r * h + (r * h) * (r * h) / 6.0);

        if !step.is_finite() {
            trace!(x = previous, slope, "halley step is not finite");
            break;
        }

        x = previous + step;
        iteration += 1;
        trace!(iteration, x, step, "halley iteration");

        if x == previous {
            break;
        }
    }

    x
}
