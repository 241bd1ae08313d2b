/// Configuration for the bisection solver.
///
/// Bisection terminates on bracket width, so `max_iters` is only a hard
/// ceiling against floating-point stalls, not the usual stopping criterion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Acceptable residual magnitude or bracket width.
    pub epsilon: f64,
    /// Hard iteration ceiling.
    pub max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon: 1e-6,
            max_iters: 1000,
        }
    }
}

impl Config {
    /// Validates that the tolerance is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is non-finite or not strictly positive.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err("epsilon must be finite and positive");
        }
        Ok(())
    }
}
