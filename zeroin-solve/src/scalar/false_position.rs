//! False position (regula falsi): bracketed secant root finding.
//!
//! Each iteration intersects the secant through the bracket endpoints with
//! the x-axis and narrows the bracket around the sign change, stopping once
//! the residual at the estimate drops below `epsilon`. Unlike bisection the
//! bracket width is not guaranteed to shrink to zero; one endpoint can
//! stagnate on concave functions, which slows convergence without causing
//! divergence and is an accepted characteristic of the method.

mod config;
mod error;

pub use config::Config;
pub use error::Error;

use zeroin_core::{Observer, ScalarFn};

use crate::scalar::{Evaluation, Solution, Status, bracket, evaluate};

/// Control actions supported by the false position solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Stop the solver early and keep the current estimate.
    StopEarly,
}

/// Iteration event emitted by the false position solver.
#[derive(Debug, Clone, Copy)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Search bracket before narrowing.
    pub bracket: [f64; 2],
    /// Evaluation at the secant estimate.
    pub eval: Evaluation,
}

/// Finds a root of `f` on the bracket using the false position method.
///
/// Observers see each iteration's secant estimate and bracket state.
///
/// # Errors
///
/// Returns an error if the bracket or config is invalid, the bracket holds
/// no sign change, the function fails or produces a non-finite residual, or
/// the iteration budget is exhausted before the residual drops below
/// `epsilon`.
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

    let mut left_eval = eval_checked(f, left)?;
    let mut right_eval = eval_checked(f, right)?;

    if left_eval.residual * right_eval.residual >= 0.0 {
        return Err(Error::NoSignChange {
            left,
            right,
            left_residual: left_eval.residual,
            right_residual: right_eval.residual,
        });
    }

    let mut last: Option<Evaluation> = None;

    for iter in 1..=config.max_iters {
        // Secant intersection with the x-axis.
        let x = (left * right_eval.residual - right * left_eval.residual)
            / (right_eval.residual - left_eval.residual);
        let eval = eval_checked(f, x)?;

        let event = Event {
            iter,
            bracket: [left, right],
            eval,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_eval(eval, Status::StoppedByObserver, iter));
        }

        if eval.residual.abs() < config.epsilon {
            return Ok(Solution::from_eval(eval, Status::Converged, iter));
        }

        if eval.residual * left_eval.residual < 0.0 {
            right = x;
            right_eval = eval;
        } else {
            left = x;
            left_eval = eval;
        }

        last = Some(eval);
    }

    let fallback = if left_eval.residual.abs() <= right_eval.residual.abs() {
        left_eval
    } else {
        right_eval
    };
    let e = last.unwrap_or(fallback);
    Err(Error::NoConvergence {
        iters: config.max_iters,
        x: e.x,
        residual: e.residual,
    })
}

/// Runs false position without observation.
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
