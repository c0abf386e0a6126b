//! Core traits for derivative-free momentum optimization.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`LossFunction`] — an opaque scalar objective over a parameter vector
//! - [`Observer`] — receives solver events and optionally returns control actions

mod loss;
mod observer;

pub use loss::LossFunction;
pub use observer::Observer;
