use std::error::Error as StdError;

use thiserror::Error;

use crate::scalar::{BracketError, EvalError};

/// Errors that can occur during bisection solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error(
        "no sign change over [{left}, {right}]: f(left) = {left_residual}, f(right) = {right_residual}"
    )]
    NoSignChange {
        left: f64,
        right: f64,
        left_residual: f64,
        right_residual: f64,
    },

    #[error("function evaluation failed")]
    Function(#[source] Box<dyn StdError + Send + Sync>),

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("bracket failed to shrink within {iters} iterations; last estimate x = {x}, f(x) = {residual}")]
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
