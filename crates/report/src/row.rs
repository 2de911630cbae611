use odestep_core::AnalyticOde;
use odestep_solvers::euler::Solution;

/// One line of the error-comparison table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    /// The step index, 0 for the initial condition.
    pub step: usize,

    /// The sample time t_n.
    pub t: f64,

    /// The numerical approximation y_n.
    pub euler: f64,

    /// The exact solution y(t_n).
    pub exact: f64,

    /// The absolute error |y(t_n) − y_n|.
    pub error: f64,
}

/// Builds one row per sample of a solver trajectory.
///
/// The exact solution is evaluated at each sample time; the error column is
/// the absolute difference against the numerical value. This is a pure
/// transformation of the trajectory.
#[must_use]
pub fn rows<F>(solution: &Solution, ode: &F) -> Vec<Row>
where
    F: AnalyticOde,
{
    solution
        .samples
        .iter()
        .enumerate()
        .map(|(step, sample)| {
            let exact = ode.exact(sample.t);
            Row {
                step,
                t: sample.t,
                euler: sample.y,
                exact,
                error: (exact - sample.y).abs(),
            }
        })
        .collect()
}
