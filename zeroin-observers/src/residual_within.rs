use zeroin_core::Observer;

use crate::traits::{CanStopEarly, HasResidual};

/// Stops a solver early once the residual is good enough.
///
/// Some callers want a looser stopping rule than a solver's own tolerance,
/// for example to cap the cost of an expensive function once the estimate is
/// "good enough". The observer waits out `min_iters` iterations, then stops
/// the run the first time the residual magnitude drops below `tolerance`.
///
/// Works with any solver whose events expose a residual and whose actions
/// can stop early.
#[derive(Debug, Clone, Copy)]
pub struct ResidualWithin {
    tolerance: f64,
    min_iters: usize,
    iter: usize,
}

impl ResidualWithin {
    /// Creates an observer that stops once `|f(x)| < tolerance`, but never
    /// before `min_iters` iterations have run.
    #[must_use]
    pub fn new(tolerance: f64, min_iters: usize) -> Self {
        Self {
            tolerance,
            min_iters,
            iter: 0,
        }
    }
}

impl<E, A> Observer<E, A> for ResidualWithin
where
    E: HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.iter += 1;
        if self.iter >= self.min_iters && event.residual().abs() < self.tolerance {
            return Some(A::stop_early());
        }
        None
    }
}
