#![warn(missing_docs)]
//! A quadrotor hover task for reinforcement learning.
//!
//! [`Task`] wraps a flight simulator implementing [`Simulator`]. The simulator
//! integrates the dynamics; the task turns its pose into an agent-facing state,
//! computes rewards against a target position and decides when an episode is
//! over.
//!
//! ## Observation
//!
//! Every call to [`Task::step`] advances the simulator [`ACTION_REPEAT`] times
//! with the same rotor speeds. The state returned to the agent is the
//! concatenation of the poses after each of these sub-steps, so its length is
//! always `ACTION_REPEAT * 6`. [`Task::reset`] tiles the initial pose the same
//! number of times.
//!
//! ## Reward
//!
//! See [`reward::evaluate`]. In short, the reward decreases with the mean
//! absolute distance to the target, a crash below the ground costs
//! [`reward::CRASH_PENALTY`] and hovering high enough near the target earns
//! [`reward::GOAL_BONUS`].
//!
//! ## Environment
//!
//! [`QuadEnv`] implements [`quadrl_core::Env`] on top of [`Task`], so the task
//! can be driven by [`quadrl_core::util::eval_with_recorder`] or
//! [`quadrl_core::DefaultEvaluator`].
mod act;
mod config;
mod env;
mod error;
mod obs;
pub mod reward;
mod sim;
mod task;
pub use act::QuadAct;
pub use config::{OutOfBounds, TaskConfig};
pub use env::{QuadEnv, QuadInfo};
pub use error::TaskError;
pub use obs::QuadObs;
pub use reward::RewardOutcome;
pub use sim::{Pose, RotorSpeeds, ScriptedSim, SimConfig, Simulator};
pub use task::{
    StepOutcome, Task, ACTION_HIGH, ACTION_LOW, ACTION_REPEAT, ACTION_SIZE, DEFAULT_TARGET_POS,
    POSE_SIZE,
};
