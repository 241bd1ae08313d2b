use std::error::Error as StdError;

use thiserror::Error;

use crate::scalar::EvalError;

/// Errors that can occur during fixed-point iteration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("initial guess is non-finite: {value}")]
    NonFiniteGuess { value: f64 },

    #[error("function evaluation failed")]
    Function(#[source] Box<dyn StdError + Send + Sync>),

    #[error("iteration function evaluation failed")]
    IterationFn(#[source] Box<dyn StdError + Send + Sync>),

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("did not converge within {iters} iterations; last estimate x = {x}, f(x) = {residual}")]
    NoConvergence { iters: usize, x: f64, residual: f64 },
}

impl<E> From<EvalError<E>> for Error
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<E>) -> Self {
        Self::Function(Box::new(err))
    }
}
