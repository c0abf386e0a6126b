use momentum_core::{LossFunction, Observer};

use super::{
    Action, Config, ConfigError, DEFAULT_INITIAL_STEP, EpochStats, Event, Reset, Solution,
    Strategy, UniformReset, config::validate_initial_step, controller::auto_tune,
    converged::ConvergedFlags, state::ParameterState, tuner::run_epoch,
};

/// A gradient-free optimizer over `n` parameters.
///
/// Owns the parameter vector and the index-aligned momentum vector. Both
/// keep their length for the life of the optimizer.
#[derive(Debug, Clone)]
pub struct Optimizer {
    state: ParameterState,
    flags: ConvergedFlags,
    strategy: Strategy,
    last: EpochStats,
}

impl Optimizer {
    /// Creates an optimizer with `n` zeroed values and the default initial step.
    ///
    /// `n == 0` is legal; every epoch then tunes nothing.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self::from_state(ParameterState::new(n, DEFAULT_INITIAL_STEP))
    }

    /// Creates an optimizer whose momentums all start at `initial_step`.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial_step` is not finite and positive.
    pub fn with_initial_step(n: usize, initial_step: f64) -> Result<Self, ConfigError> {
        validate_initial_step(initial_step)?;
        Ok(Self::from_state(ParameterState::new(n, initial_step)))
    }

    fn from_state(state: ParameterState) -> Self {
        Self {
            state,
            flags: ConvergedFlags::default(),
            strategy: Strategy::default(),
            last: EpochStats::initial(),
        }
    }

    /// Sets the sweep strategy used by every later epoch.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the sweep strategy.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns `true` if the optimizer has no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.len() == 0
    }

    /// Returns the current parameter values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.state.values
    }

    /// Returns the parameter values for writing.
    ///
    /// Entries are not validated; keep them finite.
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.state.values
    }

    /// Returns the current signed step sizes.
    #[must_use]
    pub fn momentums(&self) -> &[f64] {
        &self.state.momentums
    }

    /// Returns the signed step sizes for writing.
    ///
    /// A zero entry is never probed again until the momentum is refilled.
    pub fn momentums_mut(&mut self) -> &mut [f64] {
        &mut self.state.momentums
    }

    /// Returns the stats of the most recent epoch.
    ///
    /// Before the first epoch the loss is `NaN` and the tuned amount is zero.
    #[must_use]
    pub fn last_tune_stats(&self) -> EpochStats {
        self.last
    }

    /// Runs one tuning epoch against `loss`, updating values and momentums in place.
    pub fn tune<L>(&mut self, loss: &L) -> EpochStats
    where
        L: LossFunction + ?Sized,
    {
        self.last = run_epoch(self.strategy, &mut self.state, &mut self.flags, loss);
        self.last
    }

    /// Repeats epochs until the loss reaches `config.min_loss()`.
    ///
    /// Every momentum is refilled to `config.initial_step()` before the first
    /// epoch. An epoch whose tuned amount is at or below `config.min_step()`
    /// triggers `reset` and another refill. The observer receives an
    /// [`Event`] after each epoch and may return [`Action::StopEarly`] or
    /// [`Action::Restart`].
    ///
    /// Without [`Config::with_max_epochs`] this only returns once the loss
    /// target is met or the observer stops the run.
    pub fn auto_tune<L, R, Obs>(
        &mut self,
        loss: &L,
        config: &Config,
        reset: R,
        observer: Obs,
    ) -> Solution
    where
        L: LossFunction + ?Sized,
        R: Reset,
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        auto_tune(self, loss, config, reset, observer)
    }

    /// Runs [`auto_tune`](Self::auto_tune) with a random [`UniformReset`] and no observer.
    pub fn auto_tune_unobserved<L>(&mut self, loss: &L, config: &Config) -> Solution
    where
        L: LossFunction + ?Sized,
    {
        self.auto_tune(loss, config, UniformReset::new(), ())
    }

    pub(super) fn state_mut(&mut self) -> &mut ParameterState {
        &mut self.state
    }
}
