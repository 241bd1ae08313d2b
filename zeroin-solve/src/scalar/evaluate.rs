use thiserror::Error;

use zeroin_core::ScalarFn;

/// The result of evaluating a scalar function at a given `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub x: f64,
    pub residual: f64,
}

/// A function evaluation that failed, with the point where it failed.
#[derive(Debug, Error)]
#[error("function evaluation failed at x = {x}")]
pub struct EvalError<E> {
    pub x: f64,
    #[source]
    pub source: E,
}

/// Evaluates the function at `x` and pairs the residual with its point.
///
/// # Errors
///
/// Returns an error if the function reports a domain failure at `x`.
pub fn evaluate<F: ScalarFn>(f: &F, x: f64) -> Result<Evaluation, EvalError<F::Error>> {
    let residual = f.eval(x).map_err(|source| EvalError { x, source })?;
    Ok(Evaluation { x, residual })
}
