use thiserror::Error;

/// The momentum every coordinate starts with unless configured otherwise.
///
/// A large power of two, so repeated halving walks down to the smallest
/// representable step in a bounded number of shrinks.
pub const DEFAULT_INITIAL_STEP: f64 = 1_048_576.0;

/// Configuration for an auto-tune run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    initial_step: f64,
    min_step: f64,
    min_loss: f64,
    max_epochs: Option<usize>,
}

/// Errors that can occur when validating a momentum search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("initial_step must be finite and positive")]
    InitialStep,

    #[error("min_step must be finite and non-negative")]
    MinStep,

    #[error("min_loss must not be NaN")]
    MinLoss,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(DEFAULT_INITIAL_STEP, 0.0, 0.0).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated thresholds and no epoch limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial_step` is not finite and positive,
    /// if `min_step` is negative or non-finite, or if `min_loss` is `NaN`.
    pub fn new(initial_step: f64, min_step: f64, min_loss: f64) -> Result<Self, ConfigError> {
        validate_initial_step(initial_step)?;
        if !min_step.is_finite() || min_step < 0.0 {
            return Err(ConfigError::MinStep);
        }
        if min_loss.is_nan() {
            return Err(ConfigError::MinLoss);
        }

        Ok(Self {
            initial_step,
            min_step,
            min_loss,
            max_epochs: None,
        })
    }

    /// Caps the run at `max_epochs` epochs.
    ///
    /// The limit is checked after each epoch, so at least one epoch always
    /// runs and a cap of zero behaves like a cap of one.
    ///
    /// Without a cap, a loss that keeps improving by more than `min_step`
    /// without reaching `min_loss` runs forever.
    #[must_use]
    pub fn with_max_epochs(mut self, max_epochs: usize) -> Self {
        self.max_epochs = Some(max_epochs);
        self
    }

    /// Returns the step every momentum is refilled with at start and on restart.
    #[must_use]
    pub fn initial_step(&self) -> f64 {
        self.initial_step
    }

    /// Returns the tuned amount at or below which an epoch counts as stagnated.
    #[must_use]
    pub fn min_step(&self) -> f64 {
        self.min_step
    }

    /// Returns the loss at or below which the run stops.
    #[must_use]
    pub fn min_loss(&self) -> f64 {
        self.min_loss
    }

    /// Returns the epoch limit, if any.
    #[must_use]
    pub fn max_epochs(&self) -> Option<usize> {
        self.max_epochs
    }
}

pub(super) fn validate_initial_step(step: f64) -> Result<(), ConfigError> {
    if step.is_finite() && step > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InitialStep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();

        assert_eq!(config.initial_step(), DEFAULT_INITIAL_STEP);
        assert_eq!(config.min_step(), 0.0);
        assert_eq!(config.min_loss(), 0.0);
        assert_eq!(config.max_epochs(), None);
    }

    #[test]
    fn rejects_bad_initial_step() {
        for step in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert_eq!(Config::new(step, 0.0, 0.0), Err(ConfigError::InitialStep));
        }
    }

    #[test]
    fn rejects_bad_min_step() {
        for min_step in [-1e-9, f64::NAN, f64::INFINITY] {
            assert_eq!(Config::new(1.0, min_step, 0.0), Err(ConfigError::MinStep));
        }
    }

    #[test]
    fn min_loss_may_be_negative_but_not_nan() {
        assert!(Config::new(1.0, 0.0, -5.0).is_ok());
        assert!(Config::new(1.0, 0.0, f64::NEG_INFINITY).is_ok());
        assert_eq!(Config::new(1.0, 0.0, f64::NAN), Err(ConfigError::MinLoss));
    }

    #[test]
    fn max_epochs_is_opt_in() {
        let config = Config::new(1.0, 1e-6, 1e-9).unwrap().with_max_epochs(50);
        assert_eq!(config.max_epochs(), Some(50));
        assert_eq!(config.min_step(), 1e-6);
    }
}
