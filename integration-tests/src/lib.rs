//! Shared callables used by the integration tests.

use thiserror::Error;

use zeroin_core::TryFn;

/// `f(x) = x^2 - 2`, with roots at `±sqrt(2)`.
pub fn shifted_square(x: f64) -> f64 {
    x * x - 2.0
}

/// Derivative of [`shifted_square`].
pub fn shifted_square_derivative(x: f64) -> f64 {
    2.0 * x
}

/// `f(x) = x^3 - x - 2`, with a single real root near `1.5214`.
pub fn cubic(x: f64) -> f64 {
    x * x * x - x - 2.0
}

/// `f(x) = x^2 - x - 2`, with roots at `-1` and `2`.
pub fn quadratic(x: f64) -> f64 {
    x * x - x - 2.0
}

/// Contractive iteration function `g(x) = sqrt(2 + x)` for [`quadratic`].
pub fn quadratic_iteration(x: f64) -> f64 {
    (2.0 + x).sqrt()
}

/// Domain error raised by [`safe_ln`].
#[derive(Debug, Error)]
#[error("ln of non-positive value {0}")]
pub struct LnDomain(pub f64);

/// `f(x) = ln(x) - 1` as a fallible callable that rejects `x <= 0`.
#[must_use]
pub fn safe_ln() -> TryFn<impl Fn(f64) -> Result<f64, LnDomain>> {
    TryFn(|x: f64| {
        if x > 0.0 {
            Ok(x.ln() - 1.0)
        } else {
            Err(LnDomain(x))
        }
    })
}
