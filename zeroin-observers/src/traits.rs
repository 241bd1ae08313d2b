//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types,
//! enabling observers to work generically across all four root-finding
//! methods.
//!
//! # Event traits
//!
//! - [`HasIteration`] — events that carry an iteration index
//! - [`HasEstimate`] — events that carry the current root estimate
//! - [`HasResidual`] — events that carry a residual value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination

use zeroin_solve::scalar::{bisection, false_position, fixed_point, newton_raphson};

/// An event that carries an iteration index.
pub trait HasIteration {
    /// Returns the 1-based iteration index for this event.
    fn iteration(&self) -> usize;
}

/// An event that carries the current root estimate.
pub trait HasEstimate {
    /// Returns the root estimate for this event.
    fn estimate(&self) -> f64;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual `f(x)` for this event.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

macro_rules! impl_event_traits {
    ($event:ty) => {
        impl HasIteration for $event {
            fn iteration(&self) -> usize {
                self.iter
            }
        }

        impl HasEstimate for $event {
            fn estimate(&self) -> f64 {
                self.eval.x
            }
        }

        impl HasResidual for $event {
            fn residual(&self) -> f64 {
                self.eval.residual
            }
        }
    };
}

impl_event_traits!(bisection::Event);
impl_event_traits!(false_position::Event);
impl_event_traits!(fixed_point::Event);
impl_event_traits!(newton_raphson::Event);

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for false_position::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for fixed_point::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for newton_raphson::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
