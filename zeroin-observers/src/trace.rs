use zeroin_core::Observer;

use crate::traits::{HasEstimate, HasIteration, HasResidual};

/// One recorded iteration diagnostic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// 1-based iteration index.
    pub iter: usize,
    /// Root estimate at this iteration.
    pub x: f64,
    /// Residual `f(x)` at this iteration.
    pub residual: f64,
}

/// Records the ordered sequence of iteration diagnostics from a solver run.
///
/// The trace never steers the solver; it observes every event, stores one
/// [`Record`] per iteration, and returns `None`. Pass `&mut trace` to a
/// solver and inspect the records afterward:
///
/// ```rust
/// use zeroin_observers::Trace;
/// use zeroin_solve::scalar::bisection::{self, Config};
///
/// let f = |x: f64| x * x - 2.0;
/// let mut trace = Trace::new();
///
/// let solution = bisection::solve(&f, [0.0, 2.0], &Config::default(), &mut trace)?;
///
/// assert_eq!(trace.len(), solution.iters);
/// # Ok::<(), bisection::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Trace {
    records: Vec<Record>,
}

impl Trace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded diagnostics in iteration order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of recorded iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the most recent record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Clears the trace for reuse across runs.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl<E, A> Observer<E, A> for Trace
where
    E: HasIteration + HasEstimate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.records.push(Record {
            iter: event.iteration(),
            x: event.estimate(),
            residual: event.residual(),
        });
        None
    }
}

/// Allows `&mut Trace` to be passed to solvers that take an observer by
/// value, so the records can be inspected after the solve completes.
impl<E, A> Observer<E, A> for &mut Trace
where
    E: HasIteration + HasEstimate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    struct FakeEvent {
        iter: usize,
        x: f64,
        residual: f64,
    }

    impl HasIteration for FakeEvent {
        fn iteration(&self) -> usize {
            self.iter
        }
    }

    impl HasEstimate for FakeEvent {
        fn estimate(&self) -> f64 {
            self.x
        }
    }

    impl HasResidual for FakeEvent {
        fn residual(&self) -> f64 {
            self.residual
        }
    }

    #[test]
    fn records_events_in_order() {
        let mut trace = Trace::new();

        for iter in 1..=3 {
            let event = FakeEvent {
                iter,
                x: iter as f64,
                residual: -(iter as f64),
            };
            let action: Option<()> = (&mut trace).observe(&event);
            assert!(action.is_none());
        }

        assert_eq!(trace.len(), 3);
        let last = trace.last().expect("non-empty");
        assert_eq!(last.iter, 3);
        assert_relative_eq!(last.x, 3.0);
        assert_relative_eq!(last.residual, -3.0);
    }

    #[test]
    fn clear_resets_the_trace() {
        let mut trace = Trace::new();
        let action: Option<()> = (&mut trace).observe(&FakeEvent {
            iter: 1,
            x: 0.5,
            residual: 0.1,
        });
        assert!(action.is_none());

        trace.clear();

        assert!(trace.is_empty());
    }
}
