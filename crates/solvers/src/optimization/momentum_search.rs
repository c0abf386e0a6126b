//! Gradient-free coordinate search with adaptive per-parameter momentum.
//!
//! # Algorithm
//!
//! Each parameter carries a signed step, its *momentum*. One epoch probes
//! every coordinate at `value + momentum`, then at `value - momentum`, and
//! keeps the first probe that lowers the loss:
//!
//! - a forward win grows the momentum by 1.5×
//! - a backward win flips its sign, so the next epoch probes that way first
//! - if neither wins, the value is restored and the momentum halved; once
//!   halving stops changing it, the momentum becomes zero and the coordinate
//!   is left alone until a restart refills it
//!
//! With [`Strategy::Simultaneous`] (the default), coordinates that only
//! shrank are revisited in further sweeps until every coordinate has either
//! moved or bottomed out. [`Strategy::Sequential`] finishes each coordinate
//! before moving on.
//!
//! [`Optimizer::auto_tune`] repeats epochs until the loss reaches
//! `min_loss`. An epoch that moves by no more than `min_step` in total is
//! treated as stagnation: a [`Reset`] strategy moves the values (uniform
//! random in `[-1, 1]` by default) and every momentum is refilled.
//!
//! # When to Use
//!
//! - The loss is an opaque, deterministic function of a few parameters
//! - Derivatives are unavailable
//! - Evaluations are cheap enough to call many times per epoch
//!
//! # Observer Events
//!
//! The controller emits one [`Event`] after every epoch, carrying the epoch
//! number, its [`EpochStats`], the restart count, and read-only views of the
//! values and momentums. Observers can return [`Action::StopEarly`] to end
//! the run or [`Action::Restart`] to force a reset.
//!
//! # Example
//!
//! ```
//! use momentum_solvers::optimization::momentum_search::{Config, Optimizer, Status};
//!
//! let mut optimizer = Optimizer::with_initial_step(1, 1.0).unwrap();
//! let loss = |v: &[f64]| (v[0] - 3.0).powi(2);
//! let config = Config::new(1.0, 1e-6, 1e-9).unwrap();
//!
//! let solution = optimizer.auto_tune_unobserved(&loss, &config);
//!
//! assert_eq!(solution.status, Status::Converged);
//! assert!((optimizer.values()[0] - 3.0).abs() < 1e-3);
//! ```

mod action;
mod config;
mod controller;
mod converged;
mod event;
mod optimizer;
mod reset;
mod solution;
mod state;
mod stats;
mod strategy;
mod tuner;


pub use action::Action;
pub use config::{Config, ConfigError, DEFAULT_INITIAL_STEP};
pub use event::Event;
pub use optimizer::Optimizer;
pub use reset::{Reset, UniformReset};
pub use solution::{Solution, Status};
pub use stats::EpochStats;
pub use strategy::Strategy;
