/// One point (t, y) on a solution trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// The independent variable, typically time.
    pub t: f64,

    /// The state value at `t`.
    pub y: f64,
}

impl Sample {
    /// Creates a new sample.
    #[must_use]
    pub fn new(t: f64, y: f64) -> Self {
        Self { t, y }
    }
}
