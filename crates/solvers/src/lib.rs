//! Derivative-free solvers built on [`momentum_core`].
//!
//! # Modules
//!
//! - [`optimization`] — minimizing an opaque scalar loss over a parameter vector

pub mod optimization;
