//! The hover task.
use crate::{
    act::to_rotor_speeds,
    config::parse_target,
    reward::{self, RewardOutcome},
    OutOfBounds, Simulator, TaskConfig, TaskError,
};
use anyhow::Result;
use log::{debug, info, trace};

/// Number of simulator steps per call of [`Task::step`].
pub const ACTION_REPEAT: usize = 3;

/// Number of elements in a pose.
pub const POSE_SIZE: usize = 6;

/// Number of rotors.
pub const ACTION_SIZE: usize = 4;

/// Lower bound of rotor speeds.
pub const ACTION_LOW: f64 = 0.0;

/// Upper bound of rotor speeds.
pub const ACTION_HIGH: f64 = 900.0;

/// Target position used when none is given.
pub const DEFAULT_TARGET_POS: [f64; 3] = [0.0, 0.0, 40.0];

/// Result of [`Task::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    /// Poses after each simulator step, concatenated in timestep order.
    pub next_state: Vec<f64>,

    /// Reward accumulated over the simulator steps.
    pub reward: f64,

    /// The episode is over, either reported by the simulator or forced by the task.
    pub done: bool,

    /// Number of simulator steps at which the goal was reached.
    pub success: usize,

    /// The vehicle crashed at one of the simulator steps.
    pub crashed: bool,

    /// The task forced the end of the episode, because of a crash or a
    /// negative accumulated reward.
    pub terminated: bool,
}

/// Mediates between a policy and a [`Simulator`].
///
/// The task keeps no episode-level state. Counters over an episode are
/// the business of the caller, see [`QuadEnv`](crate::QuadEnv).
#[derive(Debug)]
pub struct Task<S: Simulator> {
    sim: S,
    target_pos: [f64; 3],
    out_of_bounds: OutOfBounds,
}

impl<S: Simulator> Task<S> {
    /// Builds the simulator from the configuration and wraps it.
    pub fn new(config: &TaskConfig) -> Result<Self> {
        config.validate()?;
        let sim = S::build(&config.sim)?;
        let target_pos = config.target()?;
        info!("Build task, target = {:?}", target_pos);

        Ok(Self {
            sim,
            target_pos,
            out_of_bounds: config.out_of_bounds,
        })
    }

    /// Wraps an existing simulator.
    ///
    /// `target_pos` defaults to [`DEFAULT_TARGET_POS`].
    pub fn with_simulator(sim: S, target_pos: Option<&[f64]>) -> Result<Self, TaskError> {
        let target_pos = match target_pos {
            Some(v) => parse_target(v)?,
            None => DEFAULT_TARGET_POS,
        };
        info!("Build task, target = {:?}", target_pos);

        Ok(Self {
            sim,
            target_pos,
            out_of_bounds: OutOfBounds::default(),
        })
    }

    /// Sets the handling of out-of-bounds rotor speeds.
    pub fn out_of_bounds(mut self, v: OutOfBounds) -> Self {
        self.out_of_bounds = v;
        self
    }

    /// Number of simulator steps per call of [`Task::step`].
    pub fn action_repeat(&self) -> usize {
        ACTION_REPEAT
    }

    /// Length of the state vector.
    pub fn state_size(&self) -> usize {
        ACTION_REPEAT * POSE_SIZE
    }

    /// Number of rotor speeds in an action.
    pub fn action_size(&self) -> usize {
        ACTION_SIZE
    }

    /// Lower bound of rotor speeds.
    pub fn action_low(&self) -> f64 {
        ACTION_LOW
    }

    /// Upper bound of rotor speeds.
    pub fn action_high(&self) -> f64 {
        ACTION_HIGH
    }

    /// Target position.
    pub fn target_pos(&self) -> &[f64; 3] {
        &self.target_pos
    }

    /// The wrapped simulator.
    pub fn sim(&self) -> &S {
        &self.sim
    }

    /// Reward of the current pose of the simulator.
    pub fn get_reward(&self) -> RewardOutcome {
        reward::evaluate(self.sim.pose(), &self.target_pos)
    }

    /// Applies the rotor speeds for [`ACTION_REPEAT`] simulator steps.
    ///
    /// Once `done` is set within a call it stays set, even when the
    /// accumulated reward becomes positive again at a later simulator step.
    /// The simulator is not advanced when the action is invalid.
    pub fn step(&mut self, rotor_speeds: &[f64]) -> Result<StepOutcome, TaskError> {
        let speeds = to_rotor_speeds(rotor_speeds, self.out_of_bounds)?;
        trace!("Task::step({:?})", speeds);

        let mut reward = 0.0;
        let mut success = 0;
        let mut done = false;
        let mut crashed = false;
        let mut terminated = false;
        let mut next_state = Vec::with_capacity(self.state_size());

        for _ in 0..ACTION_REPEAT {
            let sim_done = self.sim.advance(&speeds);
            let outcome = self.get_reward();
            reward += outcome.reward;
            next_state.extend_from_slice(self.sim.pose());

            if outcome.goal {
                debug!("Goal reached at {:?}", self.sim.pose());
                success += 1;
            }
            if outcome.crashed {
                debug!("Crashed at {:?}", self.sim.pose());
                crashed = true;
            }
            if outcome.crashed || reward < 0.0 {
                terminated = true;
            }
            done = done || sim_done || terminated;
        }

        Ok(StepOutcome {
            next_state,
            reward,
            done,
            success,
            crashed,
            terminated,
        })
    }

    /// Resets the simulator and returns the initial pose tiled [`ACTION_REPEAT`] times.
    pub fn reset(&mut self) -> Vec<f64> {
        trace!("Task::reset()");
        self.sim.reset();
        self.sim.pose().repeat(ACTION_REPEAT)
    }
}
