use momentum_core::Observer;
use momentum_solvers::optimization::momentum_search::{Action, Event};
use tracing::info;

/// Logs one line per epoch at `info` level.
///
/// Every `every` epochs (and always on the first) the epoch number, tuned
/// amount, loss, restart count, and current values are emitted under the
/// `momentum::progress` target. Never returns an action.
#[derive(Debug, Clone)]
pub struct ProgressLog {
    every: usize,
    logged: usize,
}

impl ProgressLog {
    /// Creates a logger that reports every epoch.
    #[must_use]
    pub fn new() -> Self {
        Self::every(1)
    }

    /// Creates a logger that reports every `every` epochs.
    ///
    /// An interval of zero is treated as one.
    #[must_use]
    pub fn every(every: usize) -> Self {
        Self {
            every: every.max(1),
            logged: 0,
        }
    }

    /// Returns how many lines have been logged.
    #[must_use]
    pub fn logged(&self) -> usize {
        self.logged
    }

    fn should_log(&self, epoch: usize) -> bool {
        epoch == 1 || epoch % self.every == 0
    }
}

impl Default for ProgressLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer<Event<'_>, Action> for ProgressLog {
    fn observe(&mut self, event: &Event<'_>) -> Option<Action> {
        if self.should_log(event.epoch) {
            self.logged += 1;
            info!(
                target: "momentum::progress",
                epoch = event.epoch,
                tuned = format_args!("{:.3e}", event.tuned()),
                loss = format_args!("{:.3e}", event.loss()),
                restarts = event.restarts,
                values = ?event.values,
                "epoch"
            );
        }
        None
    }
}

impl Observer<Event<'_>, Action> for &mut ProgressLog {
    fn observe(&mut self, event: &Event<'_>) -> Option<Action> {
        (**self).observe(event)
    }
}
