//! Numerical integrators for scalar ODE problems.
//!
//! # Solvers
//!
//! - [`euler`] — fixed-step explicit (forward) Euler

pub mod euler;
