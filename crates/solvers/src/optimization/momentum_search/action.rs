/// Actions an observer can take after an epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run immediately, keeping the current values.
    StopEarly,

    /// Treat this epoch as stagnated.
    ///
    /// The values are reset and every momentum is refilled to the initial
    /// step, even though the epoch may have moved more than `min_step`.
    /// Has no effect once the loss has reached `min_loss`.
    Restart,
}
