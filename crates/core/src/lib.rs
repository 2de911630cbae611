//! Core traits and types shared by the odestep crates.
//!
//! This crate defines the abstractions the solver and reporting crates
//! build on:
//!
//! - [`ScalarOde`] — the right-hand side of a first-order scalar ODE
//! - [`AnalyticOde`] — an ODE whose closed-form solution is known
//! - [`Sample`] — one (t, y) point on a solution trajectory
//! - [`problems`] — concrete problem definitions

mod ode;
mod sample;

pub mod problems;

pub use ode::{AnalyticOde, ScalarOde};
pub use sample::Sample;
