/// A scalar objective over a fixed-length parameter vector.
///
/// Optimizers call [`loss`](LossFunction::loss) many times per epoch and
/// compare the results with `<`, so implementations must be deterministic:
/// the same `values` always produce the same loss. The slice is an immutable
/// view of the optimizer's parameters and is only valid for the duration of
/// the call.
///
/// Any `Fn(&[f64]) -> f64` closure is a loss function. Closures that need to
/// keep bookkeeping across calls can use interior mutability.
///
/// A loss that returns `NaN` never compares as an improvement, so the
/// optimizer will never accept a move while it does.
pub trait LossFunction {
    /// Evaluates the objective at `values`.
    fn loss(&self, values: &[f64]) -> f64;
}

impl<F> LossFunction for F
where
    F: Fn(&[f64]) -> f64,
{
    fn loss(&self, values: &[f64]) -> f64 {
        self(values)
    }
}
