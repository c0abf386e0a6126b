//! Reusable observers for momentum optimization runs.
//!
//! This crate provides [`Observer`] implementations and capability traits
//! that plug into [`Optimizer::auto_tune`].
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for reusable observers
//!   ([`HasLoss`], [`HasEpoch`], [`CanStopEarly`], [`CanRestart`])
//!
//! # Observers
//!
//! - [`ProgressLog`] — logs every epoch through `tracing`
//! - [`LossHistory`] — records the loss after every epoch
//! - [`StopAfterStall`] — stops a run whose loss has stopped improving
//! - [`RestartAfterStall`] — forces a restart when the loss stops improving
//!
//! [`Observer`]: momentum_core::Observer
//! [`Optimizer::auto_tune`]: momentum_solvers::optimization::momentum_search::Optimizer::auto_tune
//! [`HasLoss`]: traits::HasLoss
//! [`HasEpoch`]: traits::HasEpoch
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanRestart`]: traits::CanRestart

pub mod traits;

mod history;
mod progress;
mod stall;

pub use history::LossHistory;
pub use progress::ProgressLog;
pub use stall::{RestartAfterStall, StopAfterStall};
