//! Newton-Raphson: fast local root finding from an initial guess.
//!
//! Each step moves along the tangent line, `x1 = x0 - f(x0)/f'(x0)`, and the
//! run stops once successive iterates are within `epsilon` of each other.
//! The derivative is supplied by the caller; if its magnitude falls below
//! [`DERIVATIVE_FLOOR`] the solver refuses to divide and reports a flat
//! derivative instead.

mod config;
mod error;

pub use config::Config;
pub use error::Error;

use zeroin_core::{Observer, ScalarFn};

use crate::scalar::{Evaluation, Solution, Status, evaluate};

/// Smallest derivative magnitude the solver will divide by.
pub const DERIVATIVE_FLOOR: f64 = 1e-10;

/// Control actions supported by the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Stop the solver early and keep the current estimate.
    StopEarly,
}

/// Iteration event emitted by the Newton-Raphson solver.
#[derive(Debug, Clone, Copy)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Iterate the step started from.
    pub previous: f64,
    /// Derivative at the previous iterate.
    pub derivative: f64,
    /// Evaluation at the new iterate.
    pub eval: Evaluation,
}

/// Finds a root of `f` by Newton-Raphson iteration from `x0`.
///
/// `dfdx` supplies the derivative of `f`; it is evaluated once per step,
/// before the division, and a magnitude below [`DERIVATIVE_FLOOR`] aborts
/// the run. Observers see each step's new iterate and residual.
///
/// # Errors
///
/// Returns an error if the config or guess is invalid, either callable
/// fails or produces a non-finite value, the derivative is flat, or the
/// iteration budget is exhausted before the step size drops below
/// `epsilon`.
pub fn solve<F, D, Obs>(
    f: &F,
    dfdx: &D,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarFn,
    D: ScalarFn,
    Obs: Observer<Event, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    if !x0.is_finite() {
        return Err(Error::NonFiniteGuess { value: x0 });
    }

    let mut current = eval_checked(f, x0)?;

    for iter in 1..=config.max_iters {
        let derivative = dfdx
            .eval(current.x)
            .map_err(|e| Error::Derivative(Box::new(e)))?;

        if !derivative.is_finite() {
            return Err(Error::NonFiniteDerivative {
                x: current.x,
                derivative,
            });
        }
        if derivative.abs() < DERIVATIVE_FLOOR {
            return Err(Error::FlatDerivative {
                x: current.x,
                derivative,
            });
        }

        let x1 = current.x - current.residual / derivative;
        let next = eval_checked(f, x1)?;

        let event = Event {
            iter,
            previous: current.x,
            derivative,
            eval: next,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_eval(next, Status::StoppedByObserver, iter));
        }

        if (x1 - current.x).abs() < config.epsilon {
            return Ok(Solution::from_eval(next, Status::Converged, iter));
        }

        current = next;
    }

    Err(Error::NoConvergence {
        iters: config.max_iters,
        x: current.x,
        residual: current.residual,
    })
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F, D>(
    f: &F,
    dfdx: &D,
    x0: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    F: ScalarFn,
    D: ScalarFn,
{
    solve(f, dfdx, x0, config, ())
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
