//! Capability traits for reusable observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and reused.
//!
//! # Event traits
//!
//! - [`HasLoss`] — events that carry a loss value
//! - [`HasEpoch`] — events that carry an epoch number
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//! - [`CanRestart`] — actions that can force a restart
//!
//! # Example
//!
//! ```rust
//! use momentum_core::Observer;
//! use momentum_observers::traits::{CanStopEarly, HasLoss};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasLoss, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.loss() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use momentum_solvers::optimization::momentum_search;

/// An event that carries a loss value.
pub trait HasLoss {
    /// Returns the loss for this event.
    fn loss(&self) -> f64;
}

/// An event that carries an epoch number.
pub trait HasEpoch {
    /// Returns the epoch this event was emitted for.
    fn epoch(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can force a restart.
pub trait CanRestart {
    /// Returns the action that resets the values and refills the steps.
    fn restart() -> Self;
}

impl HasLoss for momentum_search::Event<'_> {
    fn loss(&self) -> f64 {
        self.stats.loss
    }
}

impl HasEpoch for momentum_search::Event<'_> {
    fn epoch(&self) -> usize {
        self.epoch
    }
}

impl CanStopEarly for momentum_search::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanRestart for momentum_search::Action {
    fn restart() -> Self {
        Self::Restart
    }
}
