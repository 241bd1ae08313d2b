/// Configuration for the false position solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Acceptable residual magnitude at the secant estimate.
    pub epsilon: f64,
    /// Iteration budget; exhaustion is reported as non-convergence.
    pub max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon: 1e-6,
            max_iters: 50,
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
