//! Reusable observers for the zeroin root-finding suite.
//!
//! This crate provides [`Observer`] implementations and capability traits
//! that work across the different solvers in the suite.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasEstimate`], [`HasResidual`], [`CanStopEarly`])
//!
//! The [`Trace`] observer records the ordered `(iteration, estimate,
//! residual)` sequence of a run; [`ResidualWithin`] stops a solver early
//! once the residual is good enough.
//!
//! [`Observer`]: zeroin_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasEstimate`]: traits::HasEstimate
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod residual_within;
mod trace;

pub use residual_within::ResidualWithin;
pub use trace::{Record, Trace};
