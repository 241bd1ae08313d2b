use super::Evaluation;

/// Indicates how a solver finished a successful run.
///
/// Iteration-budget exhaustion is not a status; it is reported as each
/// solver's `NoConvergence` error so it can never be mistaken for success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a successful solver run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Best estimate of the root.
    pub x: f64,
    /// Residual `f(x)` at the reported root estimate.
    pub residual: f64,
    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    /// Constructs a solution from an evaluation at the reported estimate.
    pub(crate) fn from_eval(eval: Evaluation, status: Status, iters: usize) -> Self {
        Self {
            status,
            x: eval.x,
            residual: eval.residual,
            iters,
        }
    }
}
