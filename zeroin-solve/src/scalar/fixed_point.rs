//! Fixed-point iteration: roots via a caller-chosen iteration function.
//!
//! The caller rewrites `f(x) = 0` as `x = g(x)` and supplies both callables:
//! `g` drives the iteration while `f` is used only to report residuals in
//! events. No contraction check is performed; whether the iteration
//! converges is the caller's responsibility via choice of `g`, and
//! divergence surfaces only as an exhausted iteration budget.

mod config;
mod error;

pub use config::Config;
pub use error::Error;

use zeroin_core::{Observer, ScalarFn};

use crate::scalar::{Evaluation, Solution, Status, evaluate};

/// Control actions supported by the fixed-point solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Stop the solver early and keep the current estimate.
    StopEarly,
}

/// Iteration event emitted by the fixed-point solver.
#[derive(Debug, Clone, Copy)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Iterate the step started from.
    pub previous: f64,
    /// Evaluation of `f` at the new iterate.
    pub eval: Evaluation,
}

/// Finds a root of `f` by iterating `x1 = g(x0)` from `x0`.
///
/// The run stops once successive iterates are within `epsilon` of each
/// other. Observers see each step's new iterate and the residual of `f`
/// there.
///
/// # Errors
///
/// Returns an error if the config or guess is invalid, either callable
/// fails, `f` produces a non-finite residual, or the iteration budget is
/// exhausted before the step size drops below `epsilon`.
pub fn solve<F, G, Obs>(
    f: &F,
    g: &G,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarFn,
    G: ScalarFn,
    Obs: Observer<Event, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    if !x0.is_finite() {
        return Err(Error::NonFiniteGuess { value: x0 });
    }

    let mut x0 = x0;
    let mut last: Option<Evaluation> = None;

    for iter in 1..=config.max_iters {
        let x1 = g.eval(x0).map_err(|e| Error::IterationFn(Box::new(e)))?;
        let eval = eval_checked(f, x1)?;

        let event = Event {
            iter,
            previous: x0,
            eval,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_eval(eval, Status::StoppedByObserver, iter));
        }

        if (x1 - x0).abs() < config.epsilon {
            return Ok(Solution::from_eval(eval, Status::Converged, iter));
        }

        x0 = x1;
        last = Some(eval);
    }

    let (x, residual) = last.map_or((x0, f64::NAN), |e| (e.x, e.residual));
    Err(Error::NoConvergence {
        iters: config.max_iters,
        x,
        residual,
    })
}

/// Runs fixed-point iteration without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F, G>(f: &F, g: &G, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: ScalarFn,
    G: ScalarFn,
{
    solve(f, g, x0, config, ())
}

fn eval_checked<F: ScalarFn>(f: &F, x: f64) -> Result<Evaluation, Error> {
    let eval = evaluate(f, x)?;
    if !eval.residual.is_finite() {
        return Err(Error::NonFiniteResidual {
            x: eval.x,
            residual: eval.residual,
        });
    }
    Ok(eval)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use thiserror::Error as ThisError;
    use zeroin_core::TryFn;

    /// Root of `x^2 - x - 2 = 0` via the contraction `g(x) = sqrt(2 + x)`.
    #[test]
    fn converges_with_contractive_iteration_function() {
        let f = |x: f64| x * x - x - 2.0;
        let g = |x: f64| (2.0 + x).sqrt();

        let solution = solve_unobserved(&f, &g, 1.0, &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn divergent_iteration_function_exhausts_budget() {
        let f = |x: f64| x * x - x - 2.0;
        // Expansive around the fixed point, so iterates run away.
        let g = |x: f64| x * x - 2.0;

        let config = Config {
            max_iters: 5,
            ..Config::default()
        };
        let result = solve_unobserved(&f, &g, 3.0, &config);

        assert!(matches!(result, Err(Error::NoConvergence { iters: 5, .. })));
    }

    #[test]
    fn errors_on_non_finite_guess() {
        let f = |x: f64| x * x - x - 2.0;
        let g = |x: f64| (2.0 + x).sqrt();

        let result = solve_unobserved(&f, &g, f64::INFINITY, &Config::default());

        assert!(matches!(result, Err(Error::NonFiniteGuess { .. })));
    }

    #[test]
    fn errors_on_non_positive_epsilon() {
        let f = |x: f64| x * x - x - 2.0;
        let g = |x: f64| (2.0 + x).sqrt();

        let config = Config {
            epsilon: 0.0,
            ..Config::default()
        };
        let result = solve_unobserved(&f, &g, 1.0, &config);

        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[derive(Debug, ThisError)]
    #[error("sqrt of negative value")]
    struct NegativeSqrt;

    #[test]
    fn iteration_function_failure_is_distinct() {
        let f = |x: f64| x * x - x - 2.0;
        let g = TryFn(|_x: f64| -> Result<f64, NegativeSqrt> { Err(NegativeSqrt) });

        let result = solve_unobserved(&f, &g, 1.0, &Config::default());

        assert!(matches!(result, Err(Error::IterationFn(_))));
    }

    #[test]
    fn observer_can_stop_iteration() {
        let f = |x: f64| x * x - x - 2.0;
        let g = |x: f64| (2.0 + x).sqrt();

        let observer = |event: &Event| {
            if event.iter >= 2 {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let solution =
            solve(&f, &g, 1.0, &Config::default(), observer).expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 2);
    }
}
