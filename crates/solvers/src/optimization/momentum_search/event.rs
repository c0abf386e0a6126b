use super::EpochStats;

/// Snapshot emitted by the auto-tune controller after every epoch.
///
/// The vectors are immutable views of the optimizer's state. Observers can
/// steer the run only through the [`Action`](super::Action) they return.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The epoch number, starting at 1.
    pub epoch: usize,

    /// Tuned amount and loss for this epoch.
    pub stats: EpochStats,

    /// Number of restarts performed before this epoch completed.
    pub restarts: usize,

    /// Parameter values after the epoch.
    pub values: &'a [f64],

    /// Momentum values after the epoch.
    pub momentums: &'a [f64],
}

impl Event<'_> {
    /// Returns the tuned amount for this epoch.
    #[must_use]
    pub fn tuned(&self) -> f64 {
        self.stats.tuned
    }

    /// Returns the loss after this epoch.
    #[must_use]
    pub fn loss(&self) -> f64 {
        self.stats.loss
    }
}
