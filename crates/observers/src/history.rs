use momentum_core::Observer;

use crate::traits::{HasEpoch, HasLoss};

/// Records `(epoch, loss)` after every event. Never returns an action.
#[derive(Debug, Clone, Default)]
pub struct LossHistory {
    entries: Vec<(usize, f64)>,
}

impl LossHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded `(epoch, loss)` pairs in order.
    #[must_use]
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Returns the lowest loss recorded, ignoring `NaN`.
    #[must_use]
    pub fn best(&self) -> Option<f64> {
        self.entries
            .iter()
            .map(|&(_, loss)| loss)
            .filter(|loss| !loss.is_nan())
            .reduce(f64::min)
    }

    /// Returns `true` if no recorded loss is greater than the one before it.
    #[must_use]
    pub fn is_non_increasing(&self) -> bool {
        self.entries.windows(2).all(|pair| pair[1].1 <= pair[0].1)
    }
}

impl<E, A> Observer<E, A> for LossHistory
where
    E: HasLoss + HasEpoch,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.entries.push((event.epoch(), event.loss()));
        None
    }
}

/// Allows `&mut LossHistory` to be passed to `auto_tune`, which takes its
/// observer by value, so the history can be read after the run.
impl<E, A> Observer<E, A> for &mut LossHistory
where
    E: HasLoss + HasEpoch,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
