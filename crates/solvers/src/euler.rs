//! Fixed-step explicit (forward) Euler integrator.
//!
//! Steps a scalar ODE forward in time using the first-order forward
//! difference:
//!
//! ```text
//! y_{n+1} = y_n + h · f(t_n, y_n)
//! ```
//!
//! The step count is the truncated quotient `(t_final - t0) / h`, so the
//! last sample may fall short of `t_final` when the interval is not an
//! exact multiple of the step size. See [`Config::num_steps`].
//!
//! # Example
//!
//! ```
//! use odestep_core::problems::ExponentialGrowth;
//! use odestep_solvers::euler;
//!
//! let config = euler::Config::new(0.0, 1.0, 0.2, 1.0)?;
//! let solution = euler::solve(&ExponentialGrowth, &config)?;
//!
//! assert_eq!(solution.samples.len(), 6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod error;
mod solution;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use solution::Solution;

use odestep_core::{Sample, ScalarOde};

/// Integrates a scalar ODE with forward Euler.
///
/// Starting from `(t0, y0)`, takes [`Config::num_steps`] fixed-size steps
/// and returns the full trajectory, initial condition included. The
/// right-hand side is assumed pure and is evaluated once per step.
///
/// # Errors
///
/// Returns [`Error::NonFinite`] if the state overflows or becomes NaN at
/// any step.
pub fn solve<F>(ode: &F, config: &Config) -> Result<Solution, Error>
where
    F: ScalarOde,
{
    let steps = config.num_steps();
    let h = config.step_size();

    let mut samples = Vec::with_capacity(steps + 1);
    let mut current = Sample::new(config.t0(), config.y0());
    samples.push(current);

    for _ in 0..steps {
        let y = current.y + h * ode.rhs(current.t, current.y);
        let t = current.t + h;

        if !y.is_finite() {
            return Err(Error::NonFinite { t });
        }

        current = Sample::new(t, y);
        samples.push(current);
    }

    Ok(Solution { samples, steps })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use odestep_core::problems::ExponentialGrowth;

    fn growth_config(step_size: f64) -> Config {
        Config::new(0.0, 1.0, step_size, 1.0).expect("valid config")
    }

    #[test]
    fn exponential_growth_scenario() {
        let solution = solve(&ExponentialGrowth, &growth_config(0.2)).expect("should solve");

        assert_eq!(solution.steps, 5);
        assert_eq!(solution.samples.len(), 6);

        let expected_t = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];
        let expected_y = [1.0, 1.2, 1.44, 1.728, 2.0736, 2.488_32];
        for (sample, (t, y)) in solution
            .samples
            .iter()
            .zip(expected_t.into_iter().zip(expected_y))
        {
            assert_relative_eq!(sample.t, t, epsilon = 1e-12);
            assert_relative_eq!(sample.y, y, epsilon = 1e-12);
        }

        // Error against e at t = 1: e - 2.48832 ≈ 0.22993.
        let final_error = (1.0_f64.exp() - solution.last().y).abs();
        assert_abs_diff_eq!(final_error, 0.229_93, epsilon = 1e-5);
    }

    #[test]
    fn first_sample_is_the_initial_condition() {
        let config = Config::new(0.5, -3.0, 0.1, 2.0).expect("valid config");
        let solution = solve(&|_t: f64, _y: f64| 1.0, &config).expect("should solve");

        assert_eq!(solution.samples[0], Sample::new(0.5, -3.0));
    }

    #[test]
    fn sample_count_matches_truncated_quotient() {
        for (h, t_final, expected) in [(0.2, 1.0, 6), (0.3, 1.0, 4), (0.5, 2.0, 5), (1.0, 0.5, 1)]
        {
            let config = Config::new(0.0, 1.0, h, t_final).expect("valid config");
            let solution = solve(&ExponentialGrowth, &config).expect("should solve");
            assert_eq!(
                solution.samples.len(),
                expected,
                "h = {h}, t_final = {t_final}"
            );
        }
    }

    #[test]
    fn consecutive_samples_are_one_step_apart() {
        let solution = solve(&ExponentialGrowth, &growth_config(0.2)).expect("should solve");

        for pair in solution.samples.windows(2) {
            assert_relative_eq!(pair[1].t - pair[0].t, 0.2, epsilon = 1e-12);
        }
    }

    #[test]
    fn truncation_stops_short_of_t_final() {
        // 1.0 / 0.3 truncates to 3 steps, so the run stops at t = 0.9.
        let solution = solve(&ExponentialGrowth, &growth_config(0.3)).expect("should solve");

        assert_eq!(solution.samples.len(), 4);
        assert_relative_eq!(solution.last().t, 0.9, epsilon = 1e-12);
    }

    #[test]
    fn halving_the_step_size_reduces_the_final_error() {
        let error_at_one = |h: f64| {
            let solution = solve(&ExponentialGrowth, &growth_config(h)).expect("should solve");
            (1.0_f64.exp() - solution.last().y).abs()
        };

        let mut h = 0.2;
        let mut previous = error_at_one(h);
        for _ in 0..4 {
            h /= 2.0;
            let current = error_at_one(h);
            assert!(
                current < previous,
                "expected error to shrink: h = {h}, {current} >= {previous}"
            );
            previous = current;
        }
    }

    #[test]
    fn negative_step_size_yields_only_the_initial_sample() {
        let config = Config::new(0.0, 1.0, -0.2, 1.0).expect("valid config");
        let solution = solve(&ExponentialGrowth, &config).expect("should solve");

        assert_eq!(solution.steps, 0);
        assert_eq!(solution.samples, vec![Sample::new(0.0, 1.0)]);
    }

    #[test]
    fn overflowing_state_fails_with_non_finite() {
        // y doubles every step from f64::MAX, overflowing immediately.
        let config = Config::new(0.0, f64::MAX, 1.0, 4.0).expect("valid config");
        let err = solve(&ExponentialGrowth, &config).unwrap_err();

        assert!(matches!(err, Error::NonFinite { t } if t == 1.0));
    }
}
