//! Contract with the flight simulator.
use anyhow::Result;
use serde::{Deserialize, Serialize};
mod scripted;
pub use scripted::ScriptedSim;

/// Position `(x, y, z)` followed by Euler angles `(roll, pitch, yaw)`.
pub type Pose = [f64; 6];

/// Speeds of the four rotors.
pub type RotorSpeeds = [f64; 4];

/// A flight simulator driven by [`Task`](crate::Task).
///
/// The simulator owns the vehicle state. [`Simulator::advance`] and
/// [`Simulator::reset`] are the only operations mutating it.
pub trait Simulator {
    /// Builds the simulator with the given initial conditions.
    fn build(config: &SimConfig) -> Result<Self>
    where
        Self: Sized;

    /// Current pose of the vehicle.
    fn pose(&self) -> &Pose;

    /// Integrates one timestep with the given rotor speeds.
    ///
    /// Returns `true` when the simulator reached its own terminal condition,
    /// e.g., the time budget of the episode is exhausted.
    fn advance(&mut self, rotor_speeds: &RotorSpeeds) -> bool;

    /// Restores the initial pose, velocities and time.
    fn reset(&mut self);
}

/// Initial conditions of a [`Simulator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Initial position and Euler angles.
    pub init_pose: Pose,

    /// Initial velocity along `(x, y, z)`.
    pub init_velocities: [f64; 3],

    /// Initial angular velocity of each Euler angle in radians per second.
    pub init_angle_velocities: [f64; 3],

    /// Time budget of an episode in simulated seconds.
    pub runtime: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            init_pose: [0.0, 0.0, 10.0, 0.0, 0.0, 0.0],
            init_velocities: [0.0; 3],
            init_angle_velocities: [0.0; 3],
            runtime: 5.0,
        }
    }
}

impl SimConfig {
    /// Sets the initial pose.
    pub fn init_pose(mut self, v: Pose) -> Self {
        self.init_pose = v;
        self
    }

    /// Sets the initial velocities.
    pub fn init_velocities(mut self, v: [f64; 3]) -> Self {
        self.init_velocities = v;
        self
    }

    /// Sets the initial angular velocities.
    pub fn init_angle_velocities(mut self, v: [f64; 3]) -> Self {
        self.init_angle_velocities = v;
        self
    }

    /// Sets the time budget of an episode.
    pub fn runtime(mut self, v: f64) -> Self {
        self.runtime = v;
        self
    }
}
