use momentum_core::Observer;

use crate::traits::{CanRestart, CanStopEarly, HasLoss};

/// Counts consecutive epochs whose loss fails to beat the best by `tolerance`.
#[derive(Debug, Clone)]
struct StallCounter {
    patience: usize,
    tolerance: f64,
    best: f64,
    stalled: usize,
}

impl StallCounter {
    fn new(patience: usize, tolerance: f64) -> Self {
        Self {
            patience,
            tolerance,
            best: f64::INFINITY,
            stalled: 0,
        }
    }

    /// Records `loss` and returns `true` once patience has run out.
    fn record(&mut self, loss: f64) -> bool {
        if loss < self.best - self.tolerance {
            self.best = loss;
            self.stalled = 0;
            return false;
        }

        self.best = self.best.min(loss);
        self.stalled += 1;
        self.stalled >= self.patience
    }

    fn forget(&mut self) {
        self.best = f64::INFINITY;
        self.stalled = 0;
    }
}

/// Stops a run once the loss stops improving.
///
/// An epoch counts as improving when its loss is below the best seen so far
/// by more than `tolerance`. After `patience` consecutive epochs without
/// improvement the observer returns [`CanStopEarly::stop_early`].
#[derive(Debug, Clone)]
pub struct StopAfterStall {
    counter: StallCounter,
}

impl StopAfterStall {
    /// Creates an observer that tolerates `patience` stalled epochs.
    #[must_use]
    pub fn new(patience: usize, tolerance: f64) -> Self {
        Self {
            counter: StallCounter::new(patience, tolerance),
        }
    }

    /// Returns the best loss seen so far.
    #[must_use]
    pub fn best(&self) -> f64 {
        self.counter.best
    }
}

impl<E, A> Observer<E, A> for StopAfterStall
where
    E: HasLoss,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.counter.record(event.loss()).then(A::stop_early)
    }
}

impl<E, A> Observer<E, A> for &mut StopAfterStall
where
    E: HasLoss,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

/// Forces a restart once the loss stops improving.
///
/// Useful when the loss keeps creeping down by more than `min_step` in a
/// basin that is not good enough. Uses the same patience rule as
/// [`StopAfterStall`], but returns [`CanRestart::restart`] and then forgets
/// its best loss, so the restarted run is judged on its own.
#[derive(Debug, Clone)]
pub struct RestartAfterStall {
    counter: StallCounter,
    restarts: usize,
}

impl RestartAfterStall {
    /// Creates an observer that tolerates `patience` stalled epochs per basin.
    #[must_use]
    pub fn new(patience: usize, tolerance: f64) -> Self {
        Self {
            counter: StallCounter::new(patience, tolerance),
            restarts: 0,
        }
    }

    /// Returns how many restarts this observer has requested.
    #[must_use]
    pub fn restarts(&self) -> usize {
        self.restarts
    }
}

impl<E, A> Observer<E, A> for RestartAfterStall
where
    E: HasLoss,
    A: CanRestart,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if !self.counter.record(event.loss()) {
            return None;
        }
        self.counter.forget();
        self.restarts += 1;
        Some(A::restart())
    }
}

impl<E, A> Observer<E, A> for &mut RestartAfterStall
where
    E: HasLoss,
    A: CanRestart,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
