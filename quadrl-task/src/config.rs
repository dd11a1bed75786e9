//! Configuration of [`Task`](crate::Task) and [`QuadEnv`](crate::QuadEnv).
use crate::{task::DEFAULT_TARGET_POS, SimConfig, TaskError};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// What to do with rotor speeds outside of `[ACTION_LOW, ACTION_HIGH]`.
///
/// Non-finite speeds are rejected regardless of this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutOfBounds {
    /// Clamp the speed into the bounds.
    #[default]
    Clamp,

    /// Fail with [`TaskError::InvalidAction`].
    Reject,
}

/// Configuration of [`Task`](crate::Task).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TaskConfig {
    /// Initial conditions forwarded to the simulator.
    pub sim: SimConfig,

    /// Target position `(x, y, z)`. Defaults to [`DEFAULT_TARGET_POS`] when `None`.
    pub target_pos: Option<Vec<f64>>,

    /// Handling of out-of-bounds rotor speeds.
    pub out_of_bounds: OutOfBounds,

    /// Maximum number of environment steps in an episode of [`QuadEnv`](crate::QuadEnv).
    pub max_steps: Option<usize>,
}

impl TaskConfig {
    /// Sets the simulator configuration.
    pub fn sim(mut self, v: SimConfig) -> Self {
        self.sim = v;
        self
    }

    /// Sets the target position.
    pub fn target_pos(mut self, v: Vec<f64>) -> Self {
        self.target_pos = Some(v);
        self
    }

    /// Sets the handling of out-of-bounds rotor speeds.
    pub fn out_of_bounds(mut self, v: OutOfBounds) -> Self {
        self.out_of_bounds = v;
        self
    }

    /// Sets the maximum number of environment steps in an episode.
    pub fn max_steps(mut self, v: Option<usize>) -> Self {
        self.max_steps = v;
        self
    }

    /// Returns the target position, falling back to the default one.
    pub fn target(&self) -> Result<[f64; 3], TaskError> {
        match &self.target_pos {
            None => Ok(DEFAULT_TARGET_POS),
            Some(v) => parse_target(v),
        }
    }

    /// Checks the configuration.
    pub fn validate(&self) -> Result<(), TaskError> {
        self.target()?;

        let runtime = self.sim.runtime;
        if !runtime.is_finite() || runtime <= 0.0 {
            return Err(TaskError::InvalidConfiguration(format!(
                "runtime must be positive, got {}",
                runtime
            )));
        }

        let sim = &self.sim;
        let finite = sim
            .init_pose
            .iter()
            .chain(sim.init_velocities.iter())
            .chain(sim.init_angle_velocities.iter())
            .all(|v| v.is_finite());
        if !finite {
            return Err(TaskError::InvalidConfiguration(
                "initial conditions must be finite".to_string(),
            ));
        }

        if self.max_steps == Some(0) {
            return Err(TaskError::InvalidConfiguration(
                "max_steps must be positive".to_string(),
            ));
        }

        Ok(())
    }

    /// Constructs [`TaskConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let config: Self = serde_yaml::from_reader(rdr)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves [`TaskConfig`] as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

pub(crate) fn parse_target(v: &[f64]) -> Result<[f64; 3], TaskError> {
    match v {
        [x, y, z] if v.iter().all(|e| e.is_finite()) => Ok([*x, *y, *z]),
        [_, _, _] => Err(TaskError::InvalidConfiguration(format!(
            "target position must be finite, got {:?}",
            v
        ))),
        _ => Err(TaskError::InvalidConfiguration(format!(
            "target position must have 3 elements, got {}",
            v.len()
        ))),
    }
}
