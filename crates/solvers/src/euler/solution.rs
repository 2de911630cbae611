use odestep_core::Sample;

/// The result of a forward Euler run.
///
/// `samples[0]` is always the initial condition; each later sample advances
/// time by one step size. The sequence is fully materialized before the
/// solver returns.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// The (t, y) trajectory, including the initial condition.
    pub samples: Vec<Sample>,

    /// Number of integration steps taken, one less than the sample count.
    pub steps: usize,
}

impl Solution {
    /// Returns the last sample of the trajectory.
    ///
    /// The trajectory always contains at least the initial condition.
    #[must_use]
    pub fn last(&self) -> Sample {
        self.samples[self.samples.len() - 1]
    }
}
