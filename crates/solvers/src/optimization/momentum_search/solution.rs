use super::EpochStats;

/// Indicates why an auto-tune run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The loss reached `min_loss`.
    Converged,

    /// Reached the configured epoch limit.
    MaxEpochs,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an auto-tune run.
///
/// The final parameter values remain in the optimizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final run status.
    pub status: Status,

    /// Stats of the last completed epoch.
    pub stats: EpochStats,

    /// Number of epochs run.
    pub epochs: usize,

    /// Number of restarts performed.
    pub restarts: usize,
}
