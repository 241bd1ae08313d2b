use std::convert::Infallible;

/// A scalar function of one real variable.
///
/// Solvers call the function through this trait and never mutate or cache
/// it. The associated error type lets a function report domain failures
/// (division by zero, logarithm of a non-positive number) as values the
/// solver can surface instead of panicking.
pub trait ScalarFn {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` is outside the function's domain.
    fn eval(&self, x: f64) -> Result<f64, Self::Error>;
}

/// Blanket implementation for infallible closures.
impl<F> ScalarFn for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn eval(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

/// Adapts a fallible closure into a [`ScalarFn`].
///
/// The blanket implementation covers `Fn(f64) -> f64`; closures that return
/// `Result` are wrapped in `TryFn` instead.
#[derive(Debug, Clone, Copy)]
pub struct TryFn<F>(pub F);

impl<F, E> ScalarFn for TryFn<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn eval(&self, x: f64) -> Result<f64, Self::Error> {
        (self.0)(x)
    }
}
