//! Root-finder parameters.

/// Numeric parameters for the bracket scan and Halley refinement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootFinderConfig {
    /// Lower end of the bracket scan.
    pub lower_bound: f64,
    /// Upper end of the bracket scan.
    pub upper_bound: f64,
    /// Distance between bracket samples.
    pub step: f64,
    /// Halley stops once `|f(x)|` is at or below this.
    pub tolerance: f64,
    /// Halley iteration cap.
    pub max_iterations: usize,
}

impl Default for RootFinderConfig {
    fn default() -> Self {
        Self {
            lower_bound: -40.0,
            upper_bound: 40.0,
            step: 0.4,
            tolerance: 1e-14,
            max_iterations: 1000,
        }
    }
}

impl RootFinderConfig {
    /// Sets the scanned bracket.
    #[must_use]
    pub fn with_bracket(mut self, lower_bound: f64, upper_bound: f64) -> Self {
        self.lower_bound = lower_bound;
        self.upper_bound = upper_bound;
        self
    }

    /// Sets the sample spacing.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets the Halley convergence margin.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the Halley iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Number of bracket samples, both ends included.
    ///
    /// Zero for an empty or inverted bracket or a non-positive step.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sample_count(&self) -> usize {
        let span = self.upper_bound - self.lower_bound;
        if !(span >= 0.0 && self.step > 0.0) || !span.is_finite() {
            return 0;
        }
        (span / self.step).round() as usize + 1
    }

    /// The `k`-th bracket sample, `lower_bound + k·step`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sample(&self, k: usize) -> f64 {
        self.lower_bound + k as f64 * self.step
    }
}
