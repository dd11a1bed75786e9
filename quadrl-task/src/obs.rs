//! Observation of the hover task.
use quadrl_core::Obs;

/// Concatenated poses observed during one step of the task.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadObs(Vec<f64>);

impl QuadObs {
    /// Constructs an observation from a state vector.
    pub fn new(state: Vec<f64>) -> Self {
        Self(state)
    }

    /// Converts the state into `f32`, the precision of records.
    pub fn to_f32(&self) -> Vec<f32> {
        self.0.iter().map(|v| *v as f32).collect()
    }
}

impl Obs for QuadObs {
    fn dummy() -> Self {
        Self(vec![])
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}
