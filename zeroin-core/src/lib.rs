//! Core abstractions for the zeroin root-finding suite.
//!
//! This crate defines the two seams every solver is built around:
//!
//! - [`ScalarFn`] — a scalar function of one real variable, the opaque
//!   callable a solver drives toward a root. Plain closures implement it
//!   directly; [`TryFn`] wraps closures that can fail (domain errors such as
//!   `ln` of a non-positive number).
//! - [`Observer`] — receives per-iteration solver events and may return a
//!   control action, letting callers capture diagnostics or stop a solver
//!   early without changing its API.

mod function;
mod observe;

pub use function::{ScalarFn, TryFn};
pub use observe::Observer;
