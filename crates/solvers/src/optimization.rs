//! Solvers for optimization problems — minimizing an opaque scalar loss.
//!
//! A [`LossFunction`] maps a parameter vector `&[f64]` to a scalar loss.
//! Solvers in this module search for the vector that minimizes it without
//! gradient information.
//!
//! # Solvers
//!
//! - [`momentum_search`] — coordinate-wise probing with an adaptive signed
//!   step ("momentum") per parameter and randomized restarts on stagnation
//!
//! [`LossFunction`]: momentum_core::LossFunction

pub mod momentum_search;
