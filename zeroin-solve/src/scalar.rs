//! Root-finding methods for scalar functions of one real variable.
//!
//! Each method encodes a distinct convergence strategy and termination
//! criterion, but all share one contract: given a callable and a tolerance,
//! return a converged [`Solution`] or a tagged error. A non-converged run is
//! never reported as success.
//!
//! # Methods
//!
//! - [`bisection`] — guaranteed convergence on a bracketed interval
//! - [`newton_raphson`] — fast local convergence, needs a derivative
//! - [`false_position`] — bracketed secant estimates; the bracket width is
//!   not guaranteed to shrink (classic stagnation on concave functions)
//! - [`fixed_point`] — iterates `x = g(x)`; convergence is the caller's
//!   responsibility via choice of `g`
//!
//! Every solver emits one event per iteration carrying the iteration index,
//! the current estimate, and the residual `f(x)`. Observers may return a
//! `StopEarly` action to halt a run and keep the current estimate.

mod bracket;
mod evaluate;
mod solution;

pub mod bisection;
pub mod false_position;
pub mod fixed_point;
pub mod newton_raphson;

pub use bracket::BracketError;
pub use evaluate::{EvalError, Evaluation, evaluate};
pub use solution::{Solution, Status};
