//! Bisection: guaranteed root finding on a bracketed interval.
//!
//! The bracket `[a, b]` must contain a sign change of `f`; the solver then
//! halves it until the residual or the bracket width drops below `epsilon`.
//! Termination is driven by geometric bracket shrinkage, with a hard
//! iteration ceiling as a fallback against floating-point stalls.

mod config;
mod error;

pub use config::Config;
pub use error::Error;

use zeroin_core::{Observer, ScalarFn};

use crate::scalar::{Evaluation, Solution, Status, bracket, evaluate};

/// Control actions supported by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Stop the solver early and keep the current estimate.
    StopEarly,
}

/// Iteration event emitted by the bisection solver.
#[derive(Debug, Clone, Copy)]
pub struct Event {
    /// Iteration counter (1-based within the bisection loop).
    pub iter: usize,
    /// Search bracket before narrowing.
    pub bracket: [f64; 2],
    /// Evaluation at the current midpoint.
    pub eval: Evaluation,
}

/// Finds a root of `f` on the bracket using the bisection method.
///
/// Observers see each iteration's midpoint evaluation and bracket state.
///
/// The loop guard tests the half-width `(b - a)/2` against `epsilon` while
/// the in-loop early return tests the full width `(b - a)`. The asymmetry is
/// intentional and kept for behavioral compatibility.
///
/// # Errors
///
/// Returns an error if the bracket or config is invalid, the bracket holds
/// no sign change, the function fails or produces a non-finite residual, or
/// the iteration ceiling is hit before the bracket shrinks to tolerance.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarFn,
    Obs: Observer<Event, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let (mut left, mut right) = self::bracket::validate(bracket)?;

    let mut left_residual = eval_checked(f, left)?.residual;
    let right_residual = eval_checked(f, right)?.residual;

    if left_residual * right_residual >= 0.0 {
        return Err(Error::NoSignChange {
            left,
            right,
            left_residual,
            right_residual,
        });
    }

    let mut iter = 0;
    let mut last: Option<Evaluation> = None;

    while (right - left) / 2.0 > config.epsilon {
        if iter == config.max_iters {
            let (x, residual) =
                last.map_or((0.5 * (left + right), f64::NAN), |e| (e.x, e.residual));
            return Err(Error::NoConvergence { iters: iter, x, residual });
        }
        iter += 1;

        let mid = 0.5 * (left + right);
        let eval = eval_checked(f, mid)?;

        let event = Event {
            iter,
            bracket: [left, right],
            eval,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_eval(eval, Status::StoppedByObserver, iter));
        }

        if eval.residual.abs() < config.epsilon || (right - left) < config.epsilon {
            return Ok(Solution::from_eval(eval, Status::Converged, iter));
        }

        if eval.residual * left_residual < 0.0 {
            right = mid;
        } else {
            left = mid;
            left_residual = eval.residual;
        }

        last = Some(eval);
    }

    // Half-width is already within tolerance; report the last midpoint, or
    // evaluate the current one if the loop never ran.
    let eval = match last {
        Some(eval) => eval,
        None => eval_checked(f, 0.5 * (left + right))?,
    };
    Ok(Solution::from_eval(eval, Status::Converged, iter))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F>(f: &F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: ScalarFn,
{
    solve(f, bracket, config, ())
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

    fn shifted_square(target: f64) -> impl Fn(f64) -> f64 {
        move |x| x * x - target
    }

    #[test]
    fn finds_square_root() {
        let f = shifted_square(2.0);

        let solution =
            solve_unobserved(&f, [0.0, 2.0], &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-5);
    }

    #[test]
    fn satisfies_tolerance_contract() {
        let f = |x: f64| x * x * x - x - 2.0;
        let config = Config::default();

        let solution = solve_unobserved(&f, [1.0, 2.0], &config).expect("should solve");

        assert!(solution.residual.abs() < 1e-4);
        assert_relative_eq!(solution.x, 1.521_379, epsilon = 1e-4);
    }

    #[test]
    fn normalizes_reversed_bracket() {
        let f = shifted_square(2.0);

        let solution =
            solve_unobserved(&f, [2.0, 0.0], &Config::default()).expect("should solve");

        assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-5);
    }

    #[test]
    fn errors_on_no_sign_change() {
        let f = shifted_square(9.0);

        // Both endpoint residuals are positive.
        let result = solve_unobserved(&f, [5.0, 10.0], &Config::default());

        assert!(matches!(result, Err(Error::NoSignChange { .. })));
    }

    #[test]
    fn root_at_endpoint_is_no_sign_change() {
        let f = |x: f64| x;

        // f(0) = 0, so the product test f(a) * f(b) >= 0 rejects the bracket.
        let result = solve_unobserved(&f, [0.0, 1.0], &Config::default());

        assert!(matches!(result, Err(Error::NoSignChange { .. })));
    }

    #[test]
    fn errors_on_invalid_bracket() {
        let f = shifted_square(2.0);

        let result = solve_unobserved(&f, [1.0, 1.0], &Config::default());
        assert!(matches!(result, Err(Error::InvalidBracket(_))));

        let result = solve_unobserved(&f, [f64::NAN, 2.0], &Config::default());
        assert!(matches!(result, Err(Error::InvalidBracket(_))));
    }

    #[test]
    fn errors_on_non_positive_epsilon() {
        let f = shifted_square(2.0);

        let config = Config {
            epsilon: 0.0,
            ..Config::default()
        };
        let result = solve_unobserved(&f, [0.0, 2.0], &config);

        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn narrow_bracket_converges_without_iterating() {
        let f = |x: f64| x;

        let solution = solve_unobserved(&f, [-1e-9, 2e-9], &Config::default())
            .expect("half-width already within tolerance");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 0);
    }

    #[test]
    fn observer_can_stop_iteration() {
        let f = shifted_square(2.0);

        let mut calls = 0usize;
        let observer = |event: &Event| {
            calls += 1;
            if event.iter >= 3 {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let solution =
            solve(&f, [0.0, 2.0], &Config::default(), observer).expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
        assert_eq!(calls, 3);
    }

    #[test]
    fn iteration_ceiling_reports_no_convergence() {
        let f = |x: f64| x;

        let config = Config {
            epsilon: 1e-12,
            max_iters: 3,
        };
        let result = solve_unobserved(&f, [-1.0, 2.0], &config);

        assert!(matches!(
            result,
            Err(Error::NoConvergence { iters: 3, .. })
        ));
    }

    #[derive(Debug, ThisError)]
    #[error("negative input")]
    struct NegativeInput;

    #[test]
    fn function_failure_is_reported() {
        let f = TryFn(|x: f64| {
            if x < 0.0 {
                Err(NegativeInput)
            } else {
                Ok(x.sqrt() - 1.0)
            }
        });

        let result = solve_unobserved(&f, [-0.5, 4.0], &Config::default());

        assert!(matches!(result, Err(Error::Function(_))));
    }

    #[test]
    fn non_finite_residual_is_reported() {
        let f = |x: f64| 1.0 / x - 1.0;

        // f(0) is infinite.
        let result = solve_unobserved(&f, [0.0, 2.0], &Config::default());

        assert!(matches!(result, Err(Error::NonFiniteResidual { .. })));
    }
}
