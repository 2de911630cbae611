//! Shared fixtures for the integration tests.

use odestep_solvers::euler;

/// The demonstration scenario: dy/dt = y, y(0) = 1 on [0, 1] with h = 0.2.
#[must_use]
pub fn canonical_config() -> euler::Config {
    euler::Config::new(0.0, 1.0, 0.2, 1.0).expect("canonical parameters are valid")
}
