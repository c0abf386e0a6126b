/// Watches an optimizer between epochs and may steer it.
///
/// After every epoch the optimizer hands the observer an event describing
/// that epoch (its number, the loss, how far the parameter vector moved, and
/// read-only views of the parameters and step sizes). Returning `None` lets
/// the next epoch run as planned; returning `Some(action)` asks the optimizer
/// to do something else, such as stopping or restarting from new values.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is an
/// observer that never acts.
pub trait Observer<E, A> {
    /// Inspects the event for a finished epoch and optionally returns an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
