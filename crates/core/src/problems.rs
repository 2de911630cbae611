//! Concrete problem definitions.

use crate::{AnalyticOde, ScalarOde};

/// The exponential growth problem: dy/dt = y with y(0) = 1.
///
/// Its exact solution is y(t) = e^t, which makes it a standard benchmark
/// for first-order integration schemes: every digit of the numerical error
/// is attributable to the scheme itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExponentialGrowth;

impl ScalarOde for ExponentialGrowth {
    fn rhs(&self, _t: f64, y: f64) -> f64 {
        y
    }
}

impl AnalyticOde for ExponentialGrowth {
    fn exact(&self, t: f64) -> f64 {
        t.exp()
    }
}
