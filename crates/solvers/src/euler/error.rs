use thiserror::Error;

/// Errors that can occur during a forward Euler run.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// The state overflowed or became NaN while stepping.
    ///
    /// Carries the time at which the first non-finite value appeared.
    #[error("state became non-finite at t = {t}")]
    NonFinite { t: f64 },
}
