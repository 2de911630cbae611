/// The right-hand side of a first-order scalar ODE, dy/dt = f(t, y).
///
/// Implementations must be pure: the same `(t, y)` always produces the same
/// rate, with no side effects. Any `Fn(f64, f64) -> f64` closure implements
/// this trait, so solvers accept plain closures as well as named problems.
pub trait ScalarOde {
    /// Evaluates the rate of change dy/dt at `(t, y)`.
    fn rhs(&self, t: f64, y: f64) -> f64;
}

impl<F> ScalarOde for F
where
    F: Fn(f64, f64) -> f64,
{
    fn rhs(&self, t: f64, y: f64) -> f64 {
        self(t, y)
    }
}

/// A scalar ODE with a known closed-form solution.
///
/// The exact solution serves as ground truth when measuring the error of a
/// numerical approximation. It is a pure function of `t`.
pub trait AnalyticOde: ScalarOde {
    /// Evaluates the exact solution y(t).
    fn exact(&self, t: f64) -> f64;
}
