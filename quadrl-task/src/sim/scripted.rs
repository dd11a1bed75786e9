//! A simulator playing back a fixed sequence of poses.
use super::{Pose, RotorSpeeds, SimConfig, Simulator};
use anyhow::Result;

/// A [`Simulator`] that plays back a scripted trajectory.
///
/// Each call to [`Simulator::advance`] moves to the next pose of the script
/// and holds the last one once the script is exhausted. Rotor speeds do not
/// affect the trajectory; the last speeds received are kept for inspection.
/// Time advances by `dt` per step and the episode is over once it exceeds
/// the configured runtime.
#[derive(Debug, Clone)]
pub struct ScriptedSim {
    config: SimConfig,
    script: Vec<Pose>,
    cursor: usize,
    pose: Pose,
    time: f64,
    dt: f64,
    last_rotor_speeds: Option<RotorSpeeds>,
}

impl ScriptedSim {
    /// Default timestep in seconds.
    pub const DEFAULT_DT: f64 = 1.0 / 50.0;

    /// Creates a simulator staying at the initial pose.
    pub fn new(config: &SimConfig) -> Self {
        Self {
            config: config.clone(),
            script: vec![],
            cursor: 0,
            pose: config.init_pose,
            time: 0.0,
            dt: Self::DEFAULT_DT,
            last_rotor_speeds: None,
        }
    }

    /// Sets the poses visited by successive calls of [`Simulator::advance`].
    pub fn with_script(mut self, script: Vec<Pose>) -> Self {
        self.script = script;
        self
    }

    /// Sets the timestep.
    pub fn dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Simulated time since the last reset.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Number of steps since the last reset.
    pub fn n_steps(&self) -> usize {
        self.cursor
    }

    /// Rotor speeds given at the last step, `None` right after a reset.
    pub fn last_rotor_speeds(&self) -> Option<&RotorSpeeds> {
        self.last_rotor_speeds.as_ref()
    }
}

impl Simulator for ScriptedSim {
    fn build(config: &SimConfig) -> Result<Self> {
        Ok(Self::new(config))
    }

    fn pose(&self) -> &Pose {
        &self.pose
    }

    fn advance(&mut self, rotor_speeds: &RotorSpeeds) -> bool {
        if let Some(pose) = self.script.get(self.cursor) {
            self.pose = *pose;
        }
        self.cursor += 1;
        self.time += self.dt;
        self.last_rotor_speeds = Some(*rotor_speeds);
        self.time > self.config.runtime
    }

    fn reset(&mut self) {
        self.pose = self.config.init_pose;
        self.cursor = 0;
        self.time = 0.0;
        self.last_rotor_speeds = None;
    }
}
