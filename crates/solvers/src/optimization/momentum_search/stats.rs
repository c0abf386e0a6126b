/// Aggregate outcome of one tuning epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochStats {
    /// Sum of momentum magnitudes behind every accepted move this epoch.
    ///
    /// Zero means no coordinate improved the loss at its current resolution.
    pub tuned: f64,

    /// Loss at the parameter vector left by the epoch.
    pub loss: f64,
}

impl EpochStats {
    /// Stats reported before any epoch has run.
    ///
    /// No loss has been evaluated yet, so `loss` is `NaN`.
    pub(super) fn initial() -> Self {
        Self {
            tuned: 0.0,
            loss: f64::NAN,
        }
    }
}
