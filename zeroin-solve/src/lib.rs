//! Iterative root-finding methods for the zeroin suite.
//!
//! Every solver in this crate drives a caller-supplied [`ScalarFn`] toward a
//! root of `f(x) = 0` and reports each iteration to an injectable
//! [`Observer`]. See the [`scalar`] module for the available methods.
//!
//! [`ScalarFn`]: zeroin_core::ScalarFn
//! [`Observer`]: zeroin_core::Observer

pub mod scalar;
