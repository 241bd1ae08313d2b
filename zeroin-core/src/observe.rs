/// Receives solver events and decides how the iteration should proceed.
///
/// Observers let callers monitor or steer a solver without changing its API,
/// enabling diagnostic capture, early stopping, or custom control policies.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver continue unchanged.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer that always returns `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tick;
    struct Stop;

    #[test]
    fn closure_observers_see_every_event() {
        let mut count = 0;
        let mut observer = |_event: &Tick| -> Option<Stop> {
            count += 1;
            None
        };

        assert!(observer.observe(&Tick).is_none());
        assert!(observer.observe(&Tick).is_none());
        assert_eq!(count, 2);
    }

    #[test]
    fn unit_observer_is_a_no_op() {
        let mut observer = ();
        let action: Option<Stop> = observer.observe(&Tick);
        assert!(action.is_none());
    }
}
