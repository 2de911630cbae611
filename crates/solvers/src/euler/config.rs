use thiserror::Error;

/// Validated parameters for a forward Euler run.
///
/// Construct with [`Config::new`]. A negative `step_size` is accepted: the
/// truncated step count then comes out as zero and the solver produces only
/// the initial sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    t0: f64,
    y0: f64,
    step_size: f64,
    t_final: f64,
}

/// Errors that can occur when validating a forward Euler config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A zero step size would make the step count division undefined.
    #[error("step_size must be nonzero")]
    ZeroStepSize,

    /// All parameters must be finite numbers.
    #[error("all parameters must be finite")]
    NonFinite,

    /// The integration interval must not run backwards.
    #[error("t_final must be greater than or equal to t0")]
    FinalTimeBeforeStart,
}

impl Config {
    /// Creates a new config with validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is non-finite, if `step_size` is
    /// zero, or if `t_final < t0`.
    pub fn new(t0: f64, y0: f64, step_size: f64, t_final: f64) -> Result<Self, ConfigError> {
        if !(t0.is_finite() && y0.is_finite() && step_size.is_finite() && t_final.is_finite()) {
            return Err(ConfigError::NonFinite);
        }
        if step_size == 0.0 {
            return Err(ConfigError::ZeroStepSize);
        }
        if t_final < t0 {
            return Err(ConfigError::FinalTimeBeforeStart);
        }

        Ok(Self {
            t0,
            y0,
            step_size,
            t_final,
        })
    }

    /// Returns the initial time.
    #[must_use]
    pub fn t0(&self) -> f64 {
        self.t0
    }

    /// Returns the initial value y(t0).
    #[must_use]
    pub fn y0(&self) -> f64 {
        self.y0
    }

    /// Returns the step size h.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Returns the final time.
    #[must_use]
    pub fn t_final(&self) -> f64 {
        self.t_final
    }

    /// Returns the number of steps the solver will take.
    ///
    /// The real-valued quotient `(t_final - t0) / step_size` is truncated
    /// toward zero, so the last sample may land strictly before `t_final`
    /// when the interval is not an exact multiple of the step size. A
    /// negative quotient truncates to zero steps.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn num_steps(&self) -> usize {
        ((self.t_final - self.t0) / self.step_size) as usize
    }
}
